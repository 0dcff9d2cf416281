pub mod body_server;
