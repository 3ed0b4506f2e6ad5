use std::sync::Arc;
use std::time::Duration;

use llcnfc::protocol::Frame;
use llcnfc::runtime::spawn_link;
use llcnfc::{Error, LinkConfig, LinkEvent, LinkState, SendStatus};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

use crate::controller::EchoController;

fn config() -> LinkConfig {
    LinkConfig::builder()
        .timer_resolution_ms(10)
        .connection_timeout_ms(50)
        .guard_timeout_ms(200)
        .ack_timeout_ms(20)
        .build()
        .unwrap()
}

async fn next_event(events: &mut UnboundedReceiver<LinkEvent>) -> LinkEvent {
    timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("event within 2s")
        .expect("event channel open")
}

#[tokio::test]
async fn connect_send_and_receive_echo() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let controller = Arc::new(EchoController::new());
    let (handle, mut events, task) = spawn_link(config(), controller.clone())?;

    handle.connect().await?;
    assert!(matches!(next_event(&mut events).await, LinkEvent::InitCompleted));
    assert_eq!(handle.state().await?, LinkState::Connected);

    assert_eq!(handle.send(b"hello".to_vec()).await?, SendStatus::Accepted);
    let mut sent = None;
    let mut echoed = None;
    while sent.is_none() || echoed.is_none() {
        match next_event(&mut events).await {
            LinkEvent::SendCompleted(res) => sent = Some(res?),
            LinkEvent::ReceiveCompleted(data) => echoed = Some(data),
            other => panic!("unexpected event {:?}", other),
        }
    }
    assert_eq!(sent, Some(5));
    assert_eq!(echoed.as_deref(), Some(&b"hello"[..]));

    // the echo acknowledged our frame and was acknowledged in turn
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(controller.frames_seen().iter().any(|f| matches!(f, Frame::Supervisory { .. })));

    handle.disconnect().await?;
    assert_eq!(handle.state().await?, LinkState::Disconnected);
    handle.shutdown().await?;
    task.await?;
    assert!(handle.is_closed());
    Ok(())
}

#[tokio::test]
async fn silent_controller_fails_init() -> anyhow::Result<()> {
    let controller = Arc::new(EchoController::silent());
    let (handle, mut events, _task) = spawn_link(config(), controller.clone())?;

    handle.connect().await?;
    match next_event(&mut events).await {
        LinkEvent::InitFailed(Error::ConnectTimeout { retries }) => assert_eq!(retries, 3),
        other => panic!("expected InitFailed, got {:?}", other),
    }
    assert_eq!(handle.state().await?, LinkState::Disconnected);
    let resets = controller
        .frames_seen()
        .iter()
        .filter(|f| f.name() == "RSET")
        .count();
    assert_eq!(resets, 4);
    Ok(())
}

#[tokio::test]
async fn send_before_connect_is_refused() -> anyhow::Result<()> {
    let (handle, _events, _task) = spawn_link(config(), Arc::new(EchoController::new()))?;
    match handle.send(vec![1u8]).await {
        Err(Error::NotConnected(LinkState::Disconnected)) => {}
        other => panic!("expected NotConnected, got {:?}", other),
    }
    Ok(())
}
