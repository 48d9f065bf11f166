//! Destinations for [`LiveMessage`]s: UDP to Live, a recording buffer, or stdout.

use std::io::{self, Write};
use std::net::UdpSocket;

use rosc::{encoder, OscPacket};

use super::config::LiveConfig;
use super::message::LiveMessage;
use super::LiveError;

/// Something that accepts Live messages.
pub trait LiveSink {
    fn send(&mut self, msg: &LiveMessage) -> Result<(), LiveError>;
}

/// Records messages in order.
impl LiveSink for Vec<LiveMessage> {
    fn send(&mut self, msg: &LiveMessage) -> Result<(), LiveError> {
        self.push(msg.clone());
        Ok(())
    }
}

/// Sends OSC packets to a Live instance over UDP.
pub struct OscSender {
    socket: UdpSocket,
    target: String,
}

impl OscSender {
    /// Bind an ephemeral local port and target `host:port` from the config.
    pub fn connect(config: &LiveConfig) -> Result<Self, LiveError> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        let target = config.address();
        socket.connect(&target)?;
        log::info!("sending OSC to {target}");
        Ok(Self { socket, target })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl LiveSink for OscSender {
    fn send(&mut self, msg: &LiveMessage) -> Result<(), LiveError> {
        let packet = OscPacket::Message(msg.to_osc());
        let bytes = encoder::encode(&packet).map_err(|e| LiveError::Encode(format!("{e:?}")))?;
        self.socket.send(&bytes)?;
        log::debug!("sent {} {:?}", msg.address(), msg.args());
        Ok(())
    }
}

/// Prints each message instead of sending it.
pub struct PrintSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PrintSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LiveSink for PrintSink<W> {
    fn send(&mut self, msg: &LiveMessage) -> Result<(), LiveError> {
        let osc = msg.to_osc();
        writeln!(self.out, "{} {:?}", osc.addr, osc.args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosc::decoder;
    use std::time::Duration;

    #[test]
    fn vec_records_in_order() {
        let mut sink: Vec<LiveMessage> = Vec::new();
        sink.send(&LiveMessage::StartPlayback).unwrap();
        sink.send(&LiveMessage::SetTempo(120.0)).unwrap();
        assert_eq!(sink, vec![LiveMessage::StartPlayback, LiveMessage::SetTempo(120.0)]);
    }

    #[test]
    fn print_sink_writes_address() {
        let mut sink = PrintSink::new(Vec::new());
        sink.send(&LiveMessage::StopPlayback).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("/live/song/stop_playing"));
    }

    #[test]
    fn osc_sender_round_trip() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let port = receiver.local_addr().unwrap().port();

        let config = LiveConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..LiveConfig::default()
        };
        let mut sender = OscSender::connect(&config).unwrap();
        assert_eq!(sender.target(), format!("127.0.0.1:{port}"));
        sender.send(&LiveMessage::SetTempo(128.0)).unwrap();

        let mut buf = [0u8; 1024];
        let size = receiver.recv(&mut buf).unwrap();
        let (_, packet) = decoder::decode_udp(&buf[..size]).unwrap();
        match packet {
            OscPacket::Message(msg) => {
                assert_eq!(msg.addr, "/live/song/set/tempo");
                assert_eq!(msg.args, vec![rosc::OscType::Float(128.0)]);
            }
            OscPacket::Bundle(_) => panic!("expected message"),
        }
    }
}
