//! FilerClient - paged listings from a filer's HTTP API
//!
//! `GET /dir/sub/?limit=N&lastFileName=X` with `Accept: application/json`
//! answers with one page of the directory:
//!
//! ```json
//! {"Path":"/dir/sub","Entries":[{"FullPath":"/dir/sub/a.txt","Mode":420}],"Limit":N}
//! ```

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

use super::{DirectoryLister, Entry, ListRequest};

/// `os.ModeDir` in the filer's file mode bits.
const MODE_DIR: u64 = 1 << 31;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListResponse {
    #[serde(default)]
    entries: Option<Vec<FilerEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FilerEntry {
    full_path: String,
    #[serde(default)]
    mode: u64,
}

impl From<FilerEntry> for Entry {
    fn from(entry: FilerEntry) -> Self {
        let name = entry
            .full_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Entry {
            name,
            is_directory: entry.mode & MODE_DIR != 0,
        }
    }
}

/// Decode a filer listing body into entries, keeping the server's order.
pub(crate) fn parse_listing(body: &str) -> serde_json::Result<Vec<Entry>> {
    let response: ListResponse = serde_json::from_str(body)?;
    Ok(response
        .entries
        .unwrap_or_default()
        .into_iter()
        .map(Entry::from)
        .collect())
}

/// Blocking HTTP client for one filer.
#[derive(Debug, Clone)]
pub struct FilerClient {
    base: Url,
    http: Client,
}

impl FilerClient {
    /// `base` is the filer address, e.g. `http://localhost:8888`. Any path on it is ignored.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|source| Error::Http {
            directory: base.to_string(),
            source,
        })?;
        Ok(Self { base, http })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build the request URL for one page.
    fn page_url(&self, request: &ListRequest) -> Result<Url> {
        let mut url = self.base.clone();
        url.set_query(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::transport(&request.directory, "filer URL cannot hold a path"))?;
            segments.clear();
            for part in request.directory.split('/').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
            // Trailing slash asks the filer for a listing rather than file content.
            segments.push("");
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &request.limit.to_string());
            if !request.start_after.is_empty() {
                query.append_pair("lastFileName", &request.start_after);
            }
            if !request.name_prefix.is_empty() {
                query.append_pair("namePattern", &format!("{}*", request.name_prefix));
            }
        }
        Ok(url)
    }
}

impl DirectoryLister for FilerClient {
    fn list_entries(&self, request: &ListRequest) -> Result<Vec<Entry>> {
        if request.inclusive_start && !request.start_after.is_empty() {
            return Err(Error::transport(
                &request.directory,
                "filer listings only support an exclusive start name",
            ));
        }

        let url = self.page_url(request)?;
        debug!(%url, "requesting filer page");

        let http_err = |source| Error::Http {
            directory: request.directory.clone(),
            source,
        };
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(
                &request.directory,
                format!("filer answered {status}"),
            ));
        }

        let body = response.text().map_err(http_err)?;
        parse_listing(&body).map_err(|e| {
            Error::transport(&request.directory, format!("malformed listing: {e}"))
        })
    }
}
