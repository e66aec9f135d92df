//! HTTP host.
//!
//! Serves the app's document for every `GET` path and accepts browser events
//! on [`EVENT_PATH`]. Each browser gets a [`Session`] keyed by a cookie; the
//! session holds the UI state the callbacks read and write.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use dashmap::DashMap;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use log::{debug, info, warn};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use webdom::{Element, Prop, find_element, render_document, render_html};

use crate::app::App;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::ids::PropId;
use crate::session::Session;
use crate::wire::{ComponentPatch, EventRequest, EventResponse};

/// Path browser events are posted to.
pub const EVENT_PATH: &str = "/_relay/event";

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "relay_session";

/// Requested by browsers on their own; never a page of the app.
const FAVICON_PATH: &str = "/favicon.ico";

const CLIENT_SCRIPT: &str = include_str!("client.js");

// =============================================================================
// Server
// =============================================================================

/// An app plus the configuration to serve it.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app, ServerConfig::default()).bind().await?;
/// println!("listening on {}", server.local_addr());
/// server.serve(CancellationToken::new()).await?;
/// ```
#[derive(Debug)]
pub struct Server {
    app: App,
    config: ServerConfig,
}

impl Server {
    pub fn new(app: App, config: ServerConfig) -> Self {
        Self { app, config }
    }

    /// Bind the listening socket.
    pub async fn bind(self) -> Result<BoundServer, ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        info!(
            "Serving '{}' on http://{} (debug: {})",
            self.app.title(),
            local_addr,
            self.config.debug
        );

        Ok(BoundServer {
            listener,
            local_addr,
            host: Arc::new(Host {
                app: self.app,
                config: self.config,
                sessions: DashMap::new(),
            }),
        })
    }
}

/// A server with a bound socket, ready to accept connections.
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    host: Arc<Host>,
}

impl BoundServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until `cancel` fires.
    pub async fn serve(self, cancel: CancellationToken) -> Result<(), ServerError> {
        loop {
            let (stream, peer) = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Shutting down server on {}", self.local_addr);
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!("Accept failed: {}", e);
                        continue;
                    }
                },
            };

            let host = self.host.clone();
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let host = host.clone();
                    async move { Ok::<_, Infallible>(host.handle(req).await) }
                });

                // Browsers drop keep-alive connections freely; not worth more than debug.
                if let Err(e) = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await
                {
                    debug!("Connection from {} ended: {}", peer, e);
                }
            });
        }
    }
}

impl std::fmt::Debug for BoundServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundServer")
            .field("local_addr", &self.local_addr)
            .field("sessions", &self.host.sessions.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Request Handling
// =============================================================================

struct Host {
    app: App,
    config: ServerConfig,
    sessions: DashMap<String, Session>,
}

impl Host {
    async fn handle(&self, req: Request<Incoming>) -> Response<Full<Bytes>> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        debug!("{} {}", method, path);

        let result = match (&method, path.as_str()) {
            (&Method::POST, EVENT_PATH) => self.handle_event(req).await,
            (&Method::GET, FAVICON_PATH) => Ok(response(
                StatusCode::NOT_FOUND,
                "text/plain; charset=utf-8",
                "Not Found",
            )),
            (&Method::GET, _) => self.handle_page(&req),
            _ => Ok(response(
                StatusCode::METHOD_NOT_ALLOWED,
                "text/plain; charset=utf-8",
                "Method Not Allowed",
            )),
        };

        result.unwrap_or_else(|e| self.error_response(&e))
    }

    fn handle_page(&self, req: &Request<Incoming>) -> Result<Response<Full<Bytes>>, ServerError> {
        let path = req.uri().path();
        let (session_id, html) = self.render_page(session_cookie(req.headers()), path)?;

        let mut response = response(StatusCode::OK, "text/html; charset=utf-8", html);
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Strict");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
        Ok(response)
    }

    /// Render the document for `path`, reusing the cookie's session if it is
    /// still alive. Returns the session id and the HTML.
    fn render_page(
        &self,
        cookie: Option<&str>,
        path: &str,
    ) -> Result<(String, String), ServerError> {
        let registry = self.app.registry();
        let location = self.app.location();

        if let Some(id) = cookie
            && let Some(mut session) = self.sessions.get_mut(id)
        {
            match &location {
                Some(location) => {
                    session.dispatch(registry, location, Prop::Str(path.to_string()))?;
                }
                None => session.touch(),
            }
            return Ok((id.to_string(), self.document(session.root())));
        }

        let mut session = self.app.new_session();
        if let Some(location) = &location {
            session.write(location, Prop::Str(path.to_string()))?;
        }
        session.initialize(registry)?;

        let html = self.document(session.root());
        let id = Uuid::new_v4().to_string();
        self.insert_session(id.clone(), session);
        Ok((id, html))
    }

    async fn handle_event(&self, req: Request<Incoming>) -> Result<Response<Full<Bytes>>, ServerError> {
        let cookie = session_cookie(req.headers()).map(str::to_string);
        let body = req.into_body().collect().await?.to_bytes();
        let event: EventRequest = serde_json::from_slice(&body)?;

        if event.event != "click" {
            return Err(ServerError::UnsupportedEvent(event.event));
        }

        let Some(mut session) = cookie.as_deref().and_then(|id| self.sessions.get_mut(id)) else {
            debug!("Event for unknown session, asking browser to reload");
            return json_response(&EventResponse::reload());
        };

        let written = session.click(self.app.registry(), &event.id)?;
        let body = EventResponse {
            updates: patches(session.root(), &written),
            reload: false,
        };
        drop(session);

        json_response(&body)
    }

    fn document(&self, root: &Element) -> String {
        render_document(
            self.app.title(),
            self.app.stylesheets(),
            root,
            Some(CLIENT_SCRIPT),
        )
    }

    /// Store a session, dropping the least recently used one when full.
    fn insert_session(&self, id: String, session: Session) {
        if self.sessions.len() >= self.config.max_sessions {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().last_seen())
                .map(|entry| entry.key().clone());
            if let Some(oldest) = oldest {
                self.sessions.remove(&oldest);
                debug!("Evicted session {}", oldest);
            }
        }
        self.sessions.insert(id, session);
    }

    fn error_response(&self, error: &ServerError) -> Response<Full<Bytes>> {
        let status = match error {
            ServerError::Json(_) | ServerError::UnsupportedEvent(_) | ServerError::Body(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("Request failed ({}): {}", status, error);

        let body = if self.config.debug {
            format!("{status}\n\n{error}")
        } else {
            status.canonical_reason().unwrap_or("Error").to_string()
        };
        response(status, "text/plain; charset=utf-8", body)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Re-rendered outer HTML of every component with a written property.
fn patches(root: &Element, written: &[PropId]) -> Vec<ComponentPatch> {
    let mut seen: Vec<&str> = Vec::new();
    let mut patches = Vec::new();
    for id in written {
        let component = id.component.as_str();
        if seen.contains(&component) {
            continue;
        }
        seen.push(component);

        let Some(el) = find_element(root, component) else {
            continue;
        };
        let html = render_html(el);
        if !html.is_empty() {
            patches.push(ComponentPatch {
                id: component.to_string(),
                html,
            });
        }
    }
    patches
}

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then_some(value)
        })
}

fn response(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn json_response(body: &EventResponse) -> Result<Response<Full<Bytes>>, ServerError> {
    let json = serde_json::to_vec(body)?;
    Ok(response(StatusCode::OK, "application/json", json))
}
