//! `InboundRequest` adapter for `http::Request` bodies.

use std::io::{self, Read};

use ::http::Request;

use crate::domain::ports::InboundRequest;

impl<B> InboundRequest for Request<B>
where
    B: Read + Send,
{
    fn body(&mut self) -> io::Result<&mut (dyn Read + Send)> {
        Ok(self.body_mut())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.method(), self.uri())
    }
}
