use http::{HeaderMap, Response, StatusCode};

/// The capability handlers use to produce a response.
///
/// The status line is written at most once: the first call to
/// [`write_status`](ResponseWriter::write_status) wins, and writing body bytes
/// before any status implies `200 OK`. Headers changed after the status was
/// written are not guaranteed to reach the client.
///
/// Writers buffer or forward bytes to the transport. Transport failures are
/// the transport's concern and are not reported back to the handler.
pub trait ResponseWriter {
    /// The headers that will be sent with the response.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Sends the status code. Later calls are ignored.
    fn write_status(&mut self, status: StatusCode);

    /// Appends bytes to the response body.
    fn write(&mut self, data: &[u8]);
}

/// A [`ResponseWriter`] that records the response in memory.
///
/// ```rust
/// use http::StatusCode;
/// use pathmux::{ResponseRecorder, ResponseWriter};
///
/// let mut w = ResponseRecorder::new();
/// w.write(b"ACK");
///
/// let res = w.into_response();
/// assert_eq!(res.status(), StatusCode::OK);
/// assert_eq!(res.body(), b"ACK");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded status, `200 OK` if none was written.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Converts the recording into an `http::Response`.
    pub fn into_response(self) -> Response<Vec<u8>> {
        let mut res = Response::new(self.body);
        *res.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *res.headers_mut() = self.headers;
        res
    }
}

impl ResponseWriter for ResponseRecorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    fn write(&mut self, data: &[u8]) {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(data);
    }
}
