pub mod magazines_service;
