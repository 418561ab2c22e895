use async_trait::async_trait;
use reqwest::{Method, Request, Response, Url};
use std::time::Duration;

/// Seam between the feed client and the actual transport. Tests implement
/// this with canned responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// Plain reqwest-backed client with the transport timeouts applied to all
/// remote calls. A timeout surfaces as an ordinary transport error.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}

/// Issues a GET for `url` against `client`.
pub async fn get<C: HttpClient>(client: &C, url: Url) -> reqwest::Result<Response> {
    client.execute(Request::new(Method::GET, url)).await
}
