#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{self, bytes, fast_config, CONNECTION_TICKS, GUARD_TICKS};
use llcnfc::protocol::{Frame, ResetParams};
use llcnfc::test_support::{info, ua, Harness};
use llcnfc::{BaudRate, Error, LinkConfig, LinkEvent, LinkState, RecoveryPolicy, Seq};

fn reset_count(h: &Harness) -> usize {
    h.written()
        .iter()
        .filter(|f| **f == Frame::reset(ResetParams::default()))
        .count()
}

#[test]
fn reset_handshake_gives_up_after_retries() -> anyhow::Result<()> {
    common::init_logging();
    let mut h = Harness::new(fast_config());
    h.session.connect()?;
    h.complete_write();

    for _ in 0..3 {
        h.ticks(CONNECTION_TICKS);
        h.flush_writes();
        assert_eq!(h.session.state(), LinkState::Connecting);
    }
    assert_eq!(reset_count(&h), 4);

    h.ticks(CONNECTION_TICKS);
    assert_eq!(h.session.state(), LinkState::Disconnected);
    assert_eq!(h.client.init_failed(), 1);
    assert!(matches!(
        h.client.events().last(),
        Some(LinkEvent::InitFailed(Error::ConnectTimeout { retries: 3 }))
    ));
    assert_eq!(h.client.device_errors(), 0);
    Ok(())
}

#[test]
fn late_ua_after_retry_connects() -> anyhow::Result<()> {
    let mut h = Harness::new(fast_config());
    h.session.connect()?;
    h.complete_write();
    h.ticks(CONNECTION_TICKS);
    h.flush_writes();
    h.deliver(&ua());
    assert_eq!(h.session.state(), LinkState::Connected);
    assert_eq!(h.session.timers().connection_retries(), 0);
    assert_eq!(h.client.init_completed(), 1);
    Ok(())
}

#[test]
fn peer_reset_renegotiates_and_replays() -> anyhow::Result<()> {
    common::init_logging();
    let mut h = Harness::connected(LinkConfig::default());
    h.send_and_complete(b"a")?;
    h.deliver(&info(0, 0, b"x"));
    h.flush_writes();
    assert_eq!(h.session.ack_sequence(), Seq::new(1));

    h.deliver(&bytes(fixtures::RSET_W2_57600));
    assert_eq!(h.session.state(), LinkState::Connecting);
    assert_eq!(h.last_written(), Frame::ua());
    assert_eq!(h.session.ack_sequence(), Seq::ZERO);
    assert_eq!(h.session.outstanding().capacity(), 2);
    let params = h.session.peer_params().copied();
    assert_eq!(params.and_then(|p| p.baud_rate), Some(BaudRate::B57600));

    h.complete_write();
    assert_eq!(h.session.state(), LinkState::Connected);
    assert_eq!(h.client.init_completed(), 1);
    match h.last_written() {
        Frame::Information { ns, nr, payload } => {
            assert_eq!((ns, nr), (Seq::ZERO, Seq::ZERO));
            assert_eq!(payload, b"a".to_vec());
        }
        other => panic!("expected replayed I frame, got {:?}", other),
    }
    assert_eq!(h.session.send_sequence(), Seq::new(1));
    Ok(())
}

#[test]
fn reset_policy_recovers_from_guard_exhaustion() -> anyhow::Result<()> {
    let config = LinkConfig {
        recovery: RecoveryPolicy::Reset,
        ..fast_config()
    };
    let mut h = Harness::connected(config);
    h.send_and_complete(b"a")?;
    for _ in 0..2 {
        h.ticks(GUARD_TICKS);
        h.flush_writes();
    }
    h.ticks(GUARD_TICKS);
    assert_eq!(h.client.device_errors(), 0);
    assert_eq!(h.session.state(), LinkState::Connecting);
    assert_eq!(h.last_written(), Frame::reset(ResetParams::default()));

    h.complete_write();
    h.deliver(&ua());
    assert_eq!(h.session.state(), LinkState::Connected);
    assert_eq!(h.client.init_completed(), 1);
    let entry = h.session.outstanding().get(0).map(|f| (f.seq, f.retry_count));
    assert_eq!(entry, Some((Seq::ZERO, 0)));
    assert!(matches!(h.last_written(), Frame::Information { .. }));
    Ok(())
}

#[test]
fn reset_policy_recovers_from_integrity_errors() {
    let config = LinkConfig {
        recovery: RecoveryPolicy::Reset,
        ..LinkConfig::default()
    };
    let mut h = Harness::connected(config);
    let mut bad = bytes(fixtures::RR_0);
    bad[2] ^= 0xFF;
    for _ in 0..4 {
        h.deliver(&bad);
        h.flush_writes();
    }
    assert_eq!(h.client.device_errors(), 0);
    assert_eq!(h.session.state(), LinkState::Connecting);
    assert_eq!(h.session.recv_error_count(), 0);
}

#[test]
fn stale_completions_after_disconnect() -> anyhow::Result<()> {
    common::init_logging();
    let mut h = Harness::connected(LinkConfig::default());
    h.session.send(b"a")?;
    h.session.disconnect();

    assert!(matches!(h.session.connect(), Err(Error::WritePending)));
    h.complete_write();
    assert!(h.client.send_completions().is_empty());

    h.session.connect()?;
    h.complete_write();
    // the length read from before the disconnect carries the new UA
    h.deliver(&ua());
    assert_eq!(h.session.recv_error_count(), 0);
    assert_eq!(h.session.state(), LinkState::Connected);
    assert_eq!(h.client.init_completed(), 2);
    assert_eq!(h.mock.lock().init_calls, 1);
    Ok(())
}

#[test]
fn reconnect_refused_while_body_read_pending() -> anyhow::Result<()> {
    let mut h = Harness::connected(LinkConfig::default());
    let raw = ua();
    h.complete_read(&raw[..1]);
    assert_eq!(h.pending_read_len(), 3);
    h.session.disconnect();

    assert!(matches!(h.session.connect(), Err(Error::ReadPending)));
    assert_eq!(h.session.state(), LinkState::Disconnected);
    // body of the old frame arrives and is dropped
    h.complete_read(&raw[1..]);
    assert!(!h.session.pending_read());

    h.session.connect()?;
    assert_eq!(h.pending_read_len(), 1);
    h.complete_write();
    h.deliver(&raw);
    assert_eq!(h.session.state(), LinkState::Connected);
    Ok(())
}

#[test]
fn smaller_peer_window_discards_excess_frames() -> anyhow::Result<()> {
    common::init_logging();
    let mut h = Harness::connected(LinkConfig::default());
    for payload in [b"a", b"b", b"c", b"d"] {
        h.send_and_complete(payload)?;
    }
    assert_eq!(h.session.outstanding().len(), 4);

    h.deliver(&bytes(fixtures::RSET_W2_57600));
    assert_eq!(h.session.outstanding().capacity(), 2);
    assert_eq!(h.session.outstanding().len(), 2);
    assert_eq!(h.session.timers().guard_count(), 2);
    let completions = h.client.send_completions();
    assert_eq!(completions.len(), 5);
    assert!(completions[..3].iter().all(|c| c.is_ok()));
    assert!(completions[3..].iter().all(|c| c.is_err()));

    let before = h.write_count();
    h.flush_writes();
    assert_eq!(h.session.state(), LinkState::Connected);
    let replayed: Vec<Seq> = h.written()[before..]
        .iter()
        .filter_map(|f| match f {
            Frame::Information { ns, .. } => Some(*ns),
            _ => None,
        })
        .collect();
    assert_eq!(replayed, vec![Seq::ZERO, Seq::new(1)]);
    assert_eq!(h.session.send_sequence(), Seq::new(2));
    Ok(())
}

#[test]
fn failed_fresh_write_is_reported_and_retried() -> anyhow::Result<()> {
    let mut h = Harness::connected(fast_config());
    h.session.send(b"a")?;
    h.fail_write(Error::Transport("tx fifo".into()));
    assert_eq!(h.client.send_completions().len(), 1);
    assert!(h.client.send_completions()[0].is_err());
    assert_eq!(h.session.send_sequence(), Seq::new(1));
    assert_eq!(h.session.outstanding().len(), 1);

    h.ticks(GUARD_TICKS);
    match h.last_written() {
        Frame::Information { ns, .. } => assert_eq!(ns, Seq::ZERO),
        other => panic!("expected resend, got {:?}", other),
    }
    Ok(())
}

#[test]
fn reconnect_after_device_error() -> anyhow::Result<()> {
    let mut h = Harness::connected(fast_config());
    h.send_and_complete(b"a")?;
    for _ in 0..3 {
        h.ticks(GUARD_TICKS);
        h.flush_writes();
    }
    assert_eq!(h.client.device_errors(), 1);

    h.session.connect()?;
    assert_eq!(h.session.state(), LinkState::Connecting);
    assert_eq!(h.session.send_sequence(), Seq::ZERO);
    assert!(h.session.outstanding().is_empty());
    Ok(())
}
