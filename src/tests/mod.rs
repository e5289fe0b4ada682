mod sizing_test;
