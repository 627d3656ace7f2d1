mod capacity_tests;
