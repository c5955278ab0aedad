//! In-memory fakes for exercising services without the network.

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::Result;
use crate::utils::http::StoreTransport;

type Responder = Box<dyn Fn(&Value) -> Value + Send + Sync>;

/// Store transport that answers from a closure and records every request body.
pub struct FakeTransport {
    responder: Responder,
    requests: Mutex<Vec<Value>>,
}

impl FakeTransport {
    pub fn new(responder: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|body| body[0]["operationName"].as_str().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl StoreTransport for FakeTransport {
    async fn post_batch(&self, body: &Value) -> Result<Value> {
        self.requests.lock().unwrap().push(body.clone());
        Ok((self.responder)(body))
    }
}

/// Logger that keeps every record so tests can assert on operator output.
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

static CAPTURE: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

/// Route log output to an in-memory buffer shared by the whole test binary.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Captured lines containing `needle`, formatted as `LEVEL message`.
pub fn logged_lines(needle: &str) -> Vec<String> {
    CAPTURE
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}

/// A listing response holding `count` slugs named `{prefix}-{n}`.
pub fn listing_page(prefix: &str, count: u64, total_count: u64) -> Value {
    let resources: Vec<Value> = (0..count)
        .map(|n| json!({ "slug": format!("{prefix}-{n}") }))
        .collect();
    json!([{
        "data": { "store": { "listing": {
            "resources": resources,
            "count": count,
            "totalCount": total_count
        }}}
    }])
}

/// A SKU search response with the given resources.
pub fn search_batch(count: u64, resources: Vec<Value>) -> Value {
    json!([{
        "data": { "store": { "search": {
            "count": count,
            "resources": resources
        }}}
    }])
}

/// A SKU resource carrying the given game item names.
pub fn sku(name: &str, game_items: &[&str]) -> Value {
    let items: Vec<Value> = game_items.iter().map(|n| json!({ "name": n })).collect();
    json!({
        "name": name,
        "subtitle": "Standalone Ships",
        "isWarbond": false,
        "url": format!("/pledge/Standalone-Ships/{name}"),
        "price": { "amount": 100000 },
        "imageComposer": [{ "url": format!("/media/{name}.jpg") }],
        "gameItems": items
    })
}
