//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::protocol::Frame;
use crate::transport::{MockTransport, Transport};
use crate::{device, Result};

/// Build a chip->host response frame: `D5 <code> <body...>`.
#[doc(hidden)]
pub fn response_frame(code: u8, body: &[u8]) -> Vec<u8> {
    let mut payload = vec![crate::constants::PN532_PN532_TO_HOST, code];
    payload.extend_from_slice(body);
    // Response payloads built here are always short enough to frame
    Frame::encode(&payload).unwrap_or_default()
}

/// A MockTransport shared between a Device (which owns a boxed clone) and
/// the test that wants to inspect sent frames afterwards.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock(Rc<RefCell<MockTransport>>);

impl SharedMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borrow(&self) -> Ref<'_, MockTransport> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, MockTransport> {
        self.0.borrow_mut()
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.0.borrow_mut().send(data)
    }
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.0.borrow_mut().receive(timeout_ms)
    }
    fn wakeup(&mut self) -> Result<()> {
        self.0.borrow_mut().wakeup()
    }
    fn reset(&mut self) -> Result<()> {
        self.0.borrow_mut().reset()
    }
}

/// Build a MockTransport pre-seeded with the given frames and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// MockTransport pre-seeded with the provided frames (ACKs included).
#[doc(hidden)]
pub fn initialized_mock_device(
    responses: Vec<Vec<u8>>,
) -> Result<device::Device<device::Initialized>> {
    let boxed = boxed_mock_with_responses(responses);
    device::Device::new_with_transport(boxed).initialize()
}
