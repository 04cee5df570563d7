use breakout::device::{Device, DeviceBuilder, Initialized, Uninitialized};
use breakout::test_support::SharedMock;
use breakout::transport::MockTransport;
use breakout::Error;

#[test]
fn builder_requires_transport() {
    assert!(matches!(
        DeviceBuilder::new().build_uninitialized(),
        Err(Error::DeviceNotFound)
    ));
}

#[test]
fn builder_then_initialize() {
    let mock = SharedMock::new();
    let device: Device<Uninitialized> = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .response_timeout_ms(300)
        .build_uninitialized()
        .unwrap();
    let device: Device<Initialized> = device.initialize().unwrap();

    assert_eq!(device.response_timeout_ms(), 300);
    assert_eq!(mock.borrow().resets, 1);
}

#[test]
fn new_with_transport_uses_default_timeouts() {
    let device = Device::new_with_transport(Box::new(MockTransport::new()));
    assert_eq!(device.ack_timeout_ms(), breakout::utils::ACK_TIMEOUT_MS);
    assert_eq!(
        device.response_timeout_ms(),
        breakout::utils::DEFAULT_READ_TIMEOUT_MS
    );
}

#[test]
fn wakeup_reaches_transport() {
    let mock = SharedMock::new();
    let mut device = Device::new_with_transport(Box::new(mock.clone()))
        .initialize()
        .unwrap();
    device.wakeup().unwrap();
    device.wakeup().unwrap();
    assert_eq!(mock.borrow().wakeups, 2);
}
