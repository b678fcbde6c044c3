use std::cell::RefCell;

use serde_json::Value;

use crate::client::{Request, Response, Transport, TransportError};

mod bedwars;
mod player;

/// Answers every request with the same response and remembers what it was
/// asked.
pub struct Canned {
    status: u16,
    body: String,
    pub requests: RefCell<Vec<Request>>,
}

impl Canned {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn last_request(&self) -> Request {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl Transport for Canned {
    fn get(&self, request: &Request) -> Result<Response, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        Ok(Response {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// A transport whose connection always fails.
pub struct Unreachable;

impl Transport for Unreachable {
    fn get(&self, _: &Request) -> Result<Response, TransportError> {
        Err("connection refused".into())
    }
}
