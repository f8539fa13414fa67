use super::*;

#[test]
fn connected_feed_reads_as_success() {
    assert_eq!(connection_tone(ConnectionStatus::Connected), Tone::Success);
    assert_eq!(connection_tone(ConnectionStatus::Disconnected), Tone::Neutral);
}
