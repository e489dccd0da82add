//! Remote list loading state with "last request wins" ordering.
//!
//! Requests are never cancelled. Instead every request gets a ticket with
//! a monotonically increasing sequence number and only the response of the
//! most recently issued ticket is applied; older responses are dropped.

use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListLoader<T> {
    data: Option<T>,
    error: Option<String>,
    issued: u64,
    in_flight: Option<u64>,
}

impl<T> Default for ListLoader<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            issued: 0,
            in_flight: None,
        }
    }
}

impl<T> ListLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request; any earlier request still in flight becomes stale
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        RequestTicket(self.issued)
    }

    /// Applies a response. Returns `false` (and changes nothing) when the
    /// ticket is not the latest one issued.
    ///
    /// Success replaces the data wholesale and clears the error; failure
    /// keeps the previous data and records the user-facing message.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        true
    }

    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_spans_exactly_the_latest_request() {
        let mut loader: ListLoader<Vec<i32>> = ListLoader::new();
        assert!(!loader.loading());

        let t = loader.begin();
        assert!(loader.loading());
        assert!(loader.complete(t, Ok(vec![1, 2])));
        assert!(!loader.loading());
        assert_eq!(loader.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut loader: ListLoader<&str> = ListLoader::new();
        let first = loader.begin();
        let second = loader.begin();

        // second resolves first, then the slower first one arrives
        assert!(loader.complete(second, Ok("page for 'ana'")));
        assert!(!loader.complete(first, Ok("page for 'an'")));
        assert_eq!(loader.data(), Some(&"page for 'ana'"));
        assert!(!loader.loading());
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut loader: ListLoader<u8> = ListLoader::new();
        let first = loader.begin();
        let _second = loader.begin();
        assert!(!loader.complete(first, Ok(1)));
        assert!(loader.loading());
        assert_eq!(loader.data(), None);
    }

    #[test]
    fn failure_keeps_previous_data_and_sets_message() {
        let mut loader: ListLoader<u8> = ListLoader::new();
        let t = loader.begin();
        loader.complete(t, Ok(7));

        let t = loader.begin();
        loader.complete(t, Err(ApiError::Unreachable));
        assert_eq!(loader.data(), Some(&7));
        assert_eq!(loader.error(), Some("No se pudo conectar con el servidor"));

        let t = loader.begin();
        loader.complete(t, Ok(8));
        assert_eq!(loader.error(), None);
        assert_eq!(loader.data(), Some(&8));
    }
}
