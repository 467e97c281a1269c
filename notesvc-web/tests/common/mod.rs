use actix_web::web::Data;
use lazy_static::lazy_static;
use notesvc::{BoxedNoteStore, InMemoryStore};
use notesvc_web::configuration::get_configuration;
use notesvc_web::startup::run;
use notesvc_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::fmt::TestWriter;

lazy_static! {
    static ref TRACING: () = {
        let configuration = get_configuration().expect("Failed to read configuration");
        init_tracing(get_subscriber(&configuration, TestWriter::new()));
    };
}

pub struct TestApp {
    pub address: String,
}

/// Serve a fresh in-memory store on a random port.
pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    lazy_static::initialize(&TRACING);

    let store: BoxedNoteStore = Box::new(InMemoryStore::new());
    let server = run(listener, Data::new(store)).expect("Failed to bind address");
    let _ = tokio::spawn(server);
    TestApp { address }
}
