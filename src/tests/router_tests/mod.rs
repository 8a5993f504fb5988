mod edit_flow_tests;
