// src/core/net.rs
// Blocking HTTP GET. One request at a time, no retries.

use std::{io::Read, time::Duration};

use reqwest::blocking::{Client, Response};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// The only network surface the jobs need. Tests swap in canned responses.
pub trait Fetch {
    /// GET `url` with `query` appended and return the body as text.
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String>;

    /// GET `url` and hand back the body as a stream.
    fn open(&self, url: &str) -> Result<Box<dyn Read>>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::UpstreamRequest {
                url: s!("(client setup)"),
                status: None,
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let resp = self.client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| Error::UpstreamRequest {
                url: s!(url),
                status: e.status().map(|s| s.as_u16()),
                reason: e.to_string(),
            })?;
        check_status(resp)
    }
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let resp = self.get(url, query)?;
        let final_url = resp.url().to_string();
        resp.text().map_err(|e| Error::UpstreamRequest {
            url: final_url,
            status: None,
            reason: e.to_string(),
        })
    }

    fn open(&self, url: &str) -> Result<Box<dyn Read>> {
        Ok(Box::new(self.get(url, &[])?))
    }
}

fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let body = resp.text().unwrap_or_default();
    let reason = format!(
        "HTTP {} {}{}",
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        body_excerpt(&body),
    );
    Err(Error::UpstreamRequest { url, status: Some(status.as_u16()), reason })
}

/// First line of an error body, clipped. The card API explains 400s in the body.
fn body_excerpt(body: &str) -> String {
    let line = body.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.is_empty() {
        return s!();
    }
    let clipped: String = line.chars().take(200).collect();
    join!(": ", &clipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_takes_first_non_blank_line() {
        assert_eq!(body_excerpt("\n  {\"error\":\"No card matching\"}\nmore"), ": {\"error\":\"No card matching\"}");
        assert_eq!(body_excerpt("   \n"), "");
    }

    #[test]
    fn excerpt_is_clipped() {
        let long = "x".repeat(500);
        assert_eq!(body_excerpt(&long).len(), 2 + 200);
    }
}
