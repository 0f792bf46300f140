mod focus_list_tests;
