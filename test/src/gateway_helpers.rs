//! A throwaway HTTP server that answers every request with one canned body.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server, StatusCode};
use serde_json::Value;
use tokio::task::JoinHandle;

pub struct MockGateway {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

enum Reply {
    Json(StatusCode, String),
    Silent,
}

impl MockGateway {
    pub async fn start(body: Value) -> hyper::Result<Self> {
        Self::spawn(Reply::Json(StatusCode::OK, body.to_string()))
    }

    pub async fn start_with_status(status: u16, body: Value) -> hyper::Result<Self> {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::spawn(Reply::Json(status, body.to_string()))
    }

    /// Accept requests but never answer, for exercising timeouts.
    pub async fn start_silent() -> hyper::Result<Self> {
        Self::spawn(Reply::Silent)
    }

    fn spawn(reply: Reply) -> hyper::Result<Self> {
        let requests = Arc::new(Mutex::new(vec![]));
        let reply = Arc::new(reply);
        let recorded = Arc::clone(&requests);
        let make_svc = make_service_fn(move |_conn| {
            let reply = Arc::clone(&reply);
            let recorded = Arc::clone(&recorded);
            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    handle(req, Arc::clone(&reply), Arc::clone(&recorded))
                }))
            }
        });
        let server = Server::try_bind(&SocketAddr::from(([127, 0, 0, 1], 0)))?.serve(make_svc);
        let addr = server.local_addr();
        let handle = tokio::spawn(async move {
            let _ = server.await;
        });
        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON bodies of the requests received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockGateway {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    req: Request<Body>,
    reply: Arc<Reply>,
    recorded: Arc<Mutex<Vec<Value>>>,
) -> hyper::Result<Response<Body>> {
    let body = hyper::body::to_bytes(req.into_body()).await?;
    if let Ok(json) = serde_json::from_slice::<Value>(&body) {
        recorded.lock().unwrap().push(json);
    }
    match reply.as_ref() {
        Reply::Json(status, body) => {
            let mut resp = Response::new(Body::from(body.clone()));
            *resp.status_mut() = *status;
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Ok(resp)
        }
        Reply::Silent => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Response::new(Body::empty()))
        }
    }
}
