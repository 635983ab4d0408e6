mod clause_tests;
