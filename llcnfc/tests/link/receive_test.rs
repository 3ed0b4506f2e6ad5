#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{self, bytes, fast_config, ACK_TICKS, GUARD_TICKS};
use llcnfc::protocol::{Frame, SupervisoryKind};
use llcnfc::test_support::{info, rej, rr, Harness};
use llcnfc::{Error, LinkConfig, LinkState, Seq};

fn corrupted(raw: &[u8]) -> Vec<u8> {
    let mut raw = raw.to_vec();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    raw
}

#[test]
fn in_sequence_payload_is_delivered_and_acked() {
    common::init_logging();
    let mut h = Harness::connected(LinkConfig::default());
    h.deliver(&bytes(fixtures::I_0_0));
    assert_eq!(h.client.received(), vec![vec![0x01, 0x02]]);
    assert_eq!(h.session.ack_sequence(), Seq::new(1));
    assert_eq!(h.last_written(), Frame::rr(Seq::new(1)));
}

#[test]
fn empty_information_frame_is_acked_not_delivered() {
    let mut h = Harness::connected(LinkConfig::default());
    h.deliver(&info(0, 0, &[]));
    assert!(h.client.received().is_empty());
    assert_eq!(h.session.ack_sequence(), Seq::new(1));
    assert_eq!(h.last_written(), Frame::rr(Seq::new(1)));
}

#[test]
fn duplicate_frame_is_reacknowledged() {
    let mut h = Harness::connected(LinkConfig::default());
    h.deliver(&info(0, 0, b"once"));
    h.flush_writes();
    let writes = h.write_count();

    h.deliver(&info(0, 0, b"once"));
    assert_eq!(h.client.received(), vec![b"once".to_vec()]);
    assert_eq!(h.write_count(), writes + 1);
    assert_eq!(h.last_written(), Frame::rr(Seq::new(1)));
}

#[test]
fn out_of_sequence_frame_is_rejected() {
    let mut h = Harness::connected(LinkConfig::default());
    h.deliver(&info(2, 0, b"early"));
    assert!(h.client.received().is_empty());
    assert_eq!(h.session.ack_sequence(), Seq::ZERO);
    assert_eq!(h.last_written(), Frame::rej(Seq::ZERO));
}

#[test]
fn piggyback_ack_waits_for_timer() {
    let config = LinkConfig {
        piggyback_ack: true,
        ..fast_config()
    };
    let mut h = Harness::connected(config);
    let writes = h.write_count();

    h.deliver(&info(0, 0, b"x"));
    assert_eq!(h.write_count(), writes);
    assert!(h.session.timers().ack_running());

    h.ticks(ACK_TICKS);
    assert_eq!(h.write_count(), writes + 1);
    assert_eq!(h.last_written(), Frame::rr(Seq::new(1)));
}

#[test]
fn piggyback_ack_rides_on_next_send() -> anyhow::Result<()> {
    let config = LinkConfig {
        piggyback_ack: true,
        ..fast_config()
    };
    let mut h = Harness::connected(config);
    h.deliver(&info(0, 0, b"x"));
    h.send_and_complete(b"reply")?;
    match h.last_written() {
        Frame::Information { nr, .. } => assert_eq!(nr, Seq::new(1)),
        other => panic!("expected I frame, got {:?}", other),
    }
    assert!(!h.session.timers().ack_running());

    let writes = h.write_count();
    h.ticks(ACK_TICKS * 2);
    assert_eq!(h.write_count(), writes);
    Ok(())
}

#[test]
fn piggyback_acks_immediately_when_window_fills() {
    let config = LinkConfig {
        piggyback_ack: true,
        ..fast_config()
    };
    let mut h = Harness::connected(config);
    let writes = h.write_count();
    for ns in 0..4u8 {
        h.deliver(&info(ns, 0, &[ns]));
    }
    assert_eq!(h.write_count(), writes + 1);
    assert_eq!(h.last_written(), Frame::rr(Seq::new(4)));
    assert_eq!(h.client.received().len(), 4);
}

#[test]
fn corrupted_frames_are_rejected_then_fatal() {
    common::init_logging();
    let mut h = Harness::connected(LinkConfig::default());
    let bad = corrupted(&bytes(fixtures::I_0_0));

    for count in 1..=3u8 {
        h.deliver(&bad);
        assert_eq!(h.session.recv_error_count(), count);
        assert_eq!(h.last_written(), Frame::rej(Seq::ZERO));
        h.flush_writes();
    }
    assert_eq!(h.client.device_errors(), 0);

    h.deliver(&bad);
    assert_eq!(h.client.device_errors(), 1);
    assert_eq!(h.session.state(), LinkState::Disconnected);
    assert!(h.client.received().is_empty());
}

#[test]
fn valid_frame_clears_error_count() {
    let mut h = Harness::connected(LinkConfig::default());
    let bad = corrupted(&bytes(fixtures::RR_0));
    for _ in 0..3 {
        h.deliver(&bad);
        h.flush_writes();
    }
    h.deliver(&bytes(fixtures::RR_0));
    assert_eq!(h.session.recv_error_count(), 0);
    for _ in 0..3 {
        h.deliver(&bad);
        h.flush_writes();
    }
    assert_eq!(h.session.state(), LinkState::Connected);
}

#[test]
fn integrity_errors_without_reject() {
    let config = LinkConfig::builder()
        .reject_on_integrity_error(false)
        .build()
        .unwrap();
    let mut h = Harness::connected(config);
    let writes = h.write_count();
    h.deliver(&corrupted(&bytes(fixtures::I_0_0)));
    assert_eq!(h.session.recv_error_count(), 1);
    assert_eq!(h.write_count(), writes);
    assert_eq!(h.pending_read_len(), 1);
}

#[test]
fn skip_mode_delivers_despite_bad_crc() {
    let config = LinkConfig::builder().verify_checksum(false).build().unwrap();
    let mut h = Harness::connected(config);
    h.deliver(&corrupted(&bytes(fixtures::I_0_0)));
    assert_eq!(h.client.received(), vec![vec![0x01, 0x02]]);
    assert_eq!(h.session.recv_error_count(), 0);
}

#[test]
fn read_failure_is_reported_and_rearmed_by_next_write() -> anyhow::Result<()> {
    let mut h = Harness::connected(LinkConfig::default());
    h.fail_read(Error::Transport("rx overrun".into()));
    assert_eq!(h.client.receive_failures(), 1);
    assert!(!h.session.pending_read());
    assert_eq!(h.session.state(), LinkState::Connected);

    h.send_and_complete(b"ping")?;
    assert!(h.session.pending_read());
    assert_eq!(h.pending_read_len(), 1);
    Ok(())
}

#[test]
fn failed_read_on_idle_link_is_rearmed_by_tick() {
    let mut h = Harness::connected(fast_config());
    h.fail_read(Error::Transport("rx overrun".into()));
    assert!(!h.session.pending_read());

    h.ticks(1);
    assert!(h.session.pending_read());
    assert_eq!(h.pending_read_len(), 1);
    h.deliver(&info(0, 0, b"late"));
    assert_eq!(h.client.received(), vec![b"late".to_vec()]);
    assert_eq!(h.client.receive_failures(), 1);
}

#[test]
fn resend_overtaken_by_ack_leaves_resending() -> anyhow::Result<()> {
    let config = LinkConfig {
        piggyback_ack: false,
        ..fast_config()
    };
    let mut h = Harness::connected(config);
    h.send_and_complete(b"a")?;
    // RR for the incoming frame stays in flight
    h.deliver(&info(0, 0, b"x"));
    assert!(h.session.pending_write());

    h.ticks(GUARD_TICKS);
    assert_eq!(h.session.state(), LinkState::Resending);
    assert_eq!(h.session.deferred_len(), 1);

    h.deliver(&rr(1));
    assert!(h.session.outstanding().is_empty());
    let writes = h.write_count();
    h.flush_writes();
    assert_eq!(h.session.state(), LinkState::Connected);
    assert_eq!(h.write_count(), writes);
    assert_eq!(h.session.deferred_len(), 0);
    Ok(())
}

#[test]
fn received_reject_resends_oldest() -> anyhow::Result<()> {
    let mut h = Harness::connected(LinkConfig::default());
    h.send_and_complete(b"a")?;
    h.send_and_complete(b"b")?;

    h.deliver(&rej(0));
    assert_eq!(h.session.state(), LinkState::Resending);
    assert_eq!(h.session.recv_error_count(), 1);
    match h.last_written() {
        Frame::Information { ns, payload, .. } => {
            assert_eq!(ns, Seq::ZERO);
            assert_eq!(payload, b"a".to_vec());
        }
        other => panic!("expected I frame, got {:?}", other),
    }
    h.complete_write();
    assert_eq!(h.session.state(), LinkState::Connected);

    h.deliver(&rr(2));
    assert_eq!(h.session.recv_error_count(), 0);
    assert!(h.session.outstanding().is_empty());
    Ok(())
}

#[test]
fn repeated_rejects_are_fatal() -> anyhow::Result<()> {
    let mut h = Harness::connected(LinkConfig::default());
    h.send_and_complete(b"a")?;
    for _ in 0..3 {
        h.deliver(&bytes(fixtures::REJ_0));
        h.flush_writes();
    }
    assert_eq!(h.client.device_errors(), 0);
    h.deliver(&bytes(fixtures::REJ_0));
    assert_eq!(h.client.device_errors(), 1);
    Ok(())
}

#[test]
fn receive_not_ready_suspends_guards() -> anyhow::Result<()> {
    let mut h = Harness::connected(fast_config());
    h.send_and_complete(b"a")?;
    h.deliver_frame(&Frame::Supervisory {
        kind: SupervisoryKind::ReceiveNotReady,
        nr: Seq::ZERO,
    });
    assert!(h.session.remote_busy());
    let writes = h.write_count();

    h.ticks(GUARD_TICKS * 4);
    assert_eq!(h.write_count(), writes);
    assert_eq!(h.client.device_errors(), 0);

    h.deliver(&bytes(fixtures::RR_0));
    assert!(!h.session.remote_busy());
    h.ticks(GUARD_TICKS);
    assert_eq!(h.write_count(), writes + 1);
    Ok(())
}
