pub mod validator;


// Integration tests are in the tests/ directory
