mod property_service_tests;
