// File: ./src/client/middleware.rs
//! Tower middleware that stamps every outgoing request with the headers the
//! API expects (`User-Agent`, `Accept: application/json`).
use http::header::{ACCEPT, USER_AGENT};
use http::{HeaderMap, HeaderValue, Request};
use std::task::{Context, Poll};
use tower_layer::Layer;
use tower_service::Service;

#[derive(Clone, Debug)]
pub struct DefaultHeadersLayer {
    headers: HeaderMap,
}

impl DefaultHeadersLayer {
    pub fn new(user_agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(user_agent) {
            Ok(val) => {
                headers.insert(USER_AGENT, val);
            }
            Err(_) => log::warn!("Ignoring invalid User-Agent: {:?}", user_agent),
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self { headers }
    }
}

impl<S> Layer<S> for DefaultHeadersLayer {
    type Service = DefaultHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DefaultHeadersService {
            inner,
            headers: self.headers.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DefaultHeadersService<S> {
    inner: S,
    headers: HeaderMap,
}

impl<S, ReqBody> Service<Request<ReqBody>> for DefaultHeadersService<S>
where
    S: Service<Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        // Headers set explicitly on the request win.
        for (name, value) in self.headers.iter() {
            req.headers_mut()
                .entry(name)
                .or_insert_with(|| value.clone());
        }
        self.inner.call(req)
    }
}
