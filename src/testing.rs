//! Scripted transport for unit tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::{ApiRequest, ApiResponse, Method, Transport, TransportError};

struct Route {
    method: Method,
    path: String,
    responses: VecDeque<ApiResponse>,
}

#[derive(Default)]
struct State {
    routes: Vec<Route>,
    queue: VecDeque<Result<ApiResponse, TransportError>>,
    requests: Vec<ApiRequest>,
}

/// Answers from per-path scripts first, then from a FIFO queue.
///
/// A route with several responses hands them out in order and repeats the
/// last one.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.state
            .borrow_mut()
            .queue
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, reason: &str) {
        self.state
            .borrow_mut()
            .queue
            .push_back(Err(TransportError(reason.to_string())));
    }

    pub fn route(&self, method: Method, path: &str, status: u16, body: &str) {
        let mut state = self.state.borrow_mut();
        let response = ApiResponse::new(status, body);
        match state
            .routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            Some(route) => route.responses.push_back(response),
            None => state.routes.push(Route {
                method,
                path: path.to_string(),
                responses: VecDeque::from([response]),
            }),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }

    pub fn request_count(&self, method: Method, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url.ends_with(path))
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());

        if let Some(route) = state
            .routes
            .iter_mut()
            .find(|r| r.method == request.method && request.url.ends_with(&r.path))
        {
            let response = if route.responses.len() > 1 {
                route.responses.pop_front()
            } else {
                route.responses.front().cloned()
            };
            if let Some(response) = response {
                return Ok(response);
            }
        }

        state
            .queue
            .pop_front()
            .unwrap_or_else(|| Err(TransportError(format!("no response scripted for {}", request.url))))
    }
}
