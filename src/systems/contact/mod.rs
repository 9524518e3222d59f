mod ground;

pub use ground::{
    ground_contact_system, resolve_ground_contact, ContactPhase, ContactTransition, CrashReason,
    GroundContactEvent,
};
