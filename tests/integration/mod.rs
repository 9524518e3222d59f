mod aircraft_tests;
