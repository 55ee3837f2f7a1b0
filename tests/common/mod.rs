pub mod label_server;
