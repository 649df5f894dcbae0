use std::io::{self, Read};

/// Port trait for an inbound HTTP request whose body carries configuration.
///
/// The request belongs to the server framework. A source built over it
/// borrows the body and never closes it.
pub trait InboundRequest: Send {
    /// The readable request body.
    fn body(&mut self) -> io::Result<&mut (dyn Read + Send)>;

    /// Human readable form of the request, used for diagnostics.
    fn describe(&self) -> String {
        "request body".to_string()
    }
}
