//! Resolving the command-line argument into a listing backend and a start point

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Where the namespace lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// A filer reachable over HTTP, e.g. `http://localhost:8888`.
    Filer(Url),
    /// A local directory served as the namespace root.
    Local(PathBuf),
}

/// A parsed `scheme://host:port/path` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub backend: Backend,
    /// Absolute path inside the namespace.
    pub path: String,
}

impl Location {
    /// Parse `http(s)://host:port/path`, `file:///path` or a bare local directory.
    ///
    /// A `file` URL addresses the local filesystem the way an `http` URL
    /// addresses a filer. A bare directory becomes the namespace root, so its
    /// path is `/`.
    pub fn parse(arg: &str) -> Result<Self> {
        if !arg.contains("://") {
            return Ok(Self {
                backend: Backend::Local(PathBuf::from(arg)),
                path: "/".to_string(),
            });
        }

        let url = Url::parse(arg).map_err(|e| Error::InvalidPath(format!("{arg}: {e}")))?;
        match url.scheme() {
            "http" | "https" => {
                let path = percent_decode(url.path());
                let mut base = url;
                base.set_path("/");
                base.set_query(None);
                base.set_fragment(None);
                Ok(Self {
                    backend: Backend::Filer(base),
                    path,
                })
            }
            "file" => {
                if url.host_str().is_some_and(|h| !h.is_empty()) {
                    return Err(Error::InvalidPath(format!("{arg}: file URLs cannot name a host")));
                }
                Ok(Self {
                    backend: Backend::Local(PathBuf::from("/")),
                    path: percent_decode(url.path()),
                })
            }
            other => Err(Error::InvalidPath(format!(
                "{arg}: unsupported scheme '{other}'"
            ))),
        }
    }

    /// The directory to list first and the name filter for that first page.
    pub fn dir_and_name(&self) -> Result<(String, String)> {
        split_dir_and_name(&self.path)
    }
}

/// Undo the URL parser's percent-encoding of a path.
fn percent_decode(path: &str) -> String {
    // form decoding treats '+' as a space and '&' as a pair separator
    let escaped = path.replace('+', "%2B").replace('&', "%26");
    url::form_urlencoded::parse(format!("p={escaped}").as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Split a namespace path into its parent directory and final name.
///
/// A trailing slash means "the directory itself", so the name comes back empty.
pub fn split_dir_and_name(path: &str) -> Result<(String, String)> {
    if path.is_empty() {
        return Ok(("/".to_string(), String::new()));
    }
    if !path.starts_with('/') {
        return Err(Error::InvalidPath(path.to_string()));
    }

    let (dir, name) = match path.rfind('/') {
        Some(i) => (&path[..=i], &path[i + 1..]),
        None => return Err(Error::InvalidPath(path.to_string())),
    };
    if dir == "/" {
        return Ok((dir.to_string(), name.to_string()));
    }
    Ok((dir[..dir.len() - 1].to_string(), name.to_string()))
}

/// Path of `name` inside `dir`, without doubling the root separator.
pub fn join_child(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(path: &str) -> (String, String) {
        split_dir_and_name(path).unwrap()
    }

    #[test]
    fn test_split_dir_and_name() {
        assert_eq!(split("/"), ("/".into(), "".into()));
        assert_eq!(split(""), ("/".into(), "".into()));
        assert_eq!(split("/a/b/"), ("/a/b".into(), "".into()));
        assert_eq!(split("/a/b"), ("/a".into(), "b".into()));
        assert_eq!(split("/b"), ("/".into(), "b".into()));
    }

    #[test]
    fn test_split_relative_path_is_invalid() {
        assert!(matches!(
            split_dir_and_name("a/b"),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_join_child() {
        assert_eq!(join_child("/", "a"), "/a");
        assert_eq!(join_child("/a", "b"), "/a/b");
    }

    #[test]
    fn test_parse_filer_url() {
        let location = Location::parse("http://localhost:8888/buckets/photos/").unwrap();
        assert_eq!(
            location.backend,
            Backend::Filer(Url::parse("http://localhost:8888/").unwrap())
        );
        assert_eq!(location.path, "/buckets/photos/");
        assert_eq!(
            location.dir_and_name().unwrap(),
            ("/buckets/photos".into(), "".into())
        );
    }

    #[test]
    fn test_parse_filer_url_decodes_path() {
        let location = Location::parse("http://filer:8888/my%20dir/a+b").unwrap();
        assert_eq!(location.path, "/my dir/a+b");
    }

    #[test]
    fn test_parse_filer_url_without_path() {
        let location = Location::parse("http://filer:8888").unwrap();
        assert_eq!(location.path, "/");
    }

    #[test]
    fn test_parse_local_directory() {
        let location = Location::parse("some/dir").unwrap();
        assert_eq!(location.backend, Backend::Local(PathBuf::from("some/dir")));
        assert_eq!(location.path, "/");
    }

    #[test]
    fn test_parse_file_url() {
        let location = Location::parse("file:///tmp/data/").unwrap();
        assert_eq!(location.backend, Backend::Local(PathBuf::from("/")));
        assert_eq!(
            location.dir_and_name().unwrap(),
            ("/tmp/data".into(), "".into())
        );
    }

    #[test]
    fn test_parse_file_url_with_host() {
        assert!(Location::parse("file://server/share").is_err());
    }

    #[test]
    fn test_parse_unknown_scheme() {
        assert!(matches!(
            Location::parse("ftp://host/dir"),
            Err(Error::InvalidPath(_))
        ));
    }
}
