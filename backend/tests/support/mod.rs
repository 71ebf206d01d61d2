//! Server harness shared by the integration suites.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the world stops the server
//! even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::HttpServer;
use actix_web::cookie::Key;
use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use awc::Client;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use yelp::domain::ports::RestaurantRepository;
use yelp::domain::{Restaurant, TRACE_ID_HEADER};
use yelp::outbound::memory::InMemoryRestaurantRepository;
use yelp::test_support::{in_memory_state, test_app_with_key};

/// Snapshot of the last response a step received.
#[derive(Debug, Clone)]
pub struct RecordedResponse {
    pub status: u16,
    pub location: Option<String>,
    pub trace_id: Option<String>,
    pub set_cookie: Option<String>,
    pub body: Value,
}

/// A running in-memory server plus the client-side session.
pub struct ServerWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: ServerHandle,
    restaurants: Arc<InMemoryRestaurantRepository>,
    cookie: RefCell<Option<String>>,
    last: RefCell<Option<RecordedResponse>>,
}

impl ServerWorld {
    /// Start a server over empty in-memory stores.
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let local = LocalSet::new();
        let (state, restaurants) = in_memory_state();

        let (base_url, server) = local
            .block_on(&runtime, async { spawn_server(state) })
            .expect("server should start");

        Self {
            runtime,
            local,
            base_url,
            server,
            restaurants,
            cookie: RefCell::new(None),
            last: RefCell::new(None),
        }
    }

    /// Send a request carrying the current session cookie, record the
    /// response and adopt any session cookie it sets.
    pub fn request(&self, method: Method, path: &str, payload: Option<Value>) -> RecordedResponse {
        let url = format!("{}{path}", self.base_url);
        let cookie = self.cookie.borrow().clone();
        let recorded = self.local.block_on(&self.runtime, async move {
            let client = Client::builder().disable_redirects().finish();
            let mut request = client.request(method, url);
            if let Some(cookie) = cookie {
                request = request.insert_header((header::COOKIE, cookie));
            }
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await,
                None => request.send().await,
            }
            .expect("request should complete");

            let header_value = |name| {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            };
            let location = header_value(header::LOCATION);
            let trace_id = header_value(header::HeaderName::from_static(TRACE_ID_HEADER));
            let set_cookie = header_value(header::SET_COOKIE);
            let status = response.status().as_u16();
            let bytes = response.body().await.expect("response body");
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON response body")
            };
            RecordedResponse {
                status,
                location,
                trace_id,
                set_cookie,
                body,
            }
        });

        if let Some(set_cookie) = &recorded.set_cookie {
            let pair = set_cookie.split(';').next().unwrap_or_default().to_owned();
            *self.cookie.borrow_mut() = Some(pair);
        }
        *self.last.borrow_mut() = Some(recorded.clone());
        recorded
    }

    /// Forget the client-side session.
    pub fn clear_session(&self) {
        *self.cookie.borrow_mut() = None;
    }

    /// Everything currently persisted, read straight from the store.
    pub fn stored_restaurants(&self) -> Vec<Restaurant> {
        let repo = self.restaurants.clone();
        self.local
            .block_on(&self.runtime, async move { repo.list().await })
            .expect("list restaurants")
    }

    /// The most recent response.
    pub fn last(&self) -> RecordedResponse {
        self.last.borrow().clone().expect("a request was made")
    }
}

impl Drop for ServerWorld {
    fn drop(&mut self) {
        let server = self.server.clone();
        self.local.block_on(&self.runtime, async move {
            server.stop(true).await;
        });
    }
}

fn spawn_server(state: yelp::inbound::http::state::HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let server = HttpServer::new(move || test_app_with_key(state.clone(), key.clone()))
        .disable_signals()
        .workers(1)
        .listen(listener)
        .map_err(|err| err.to_string())?
        .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}
