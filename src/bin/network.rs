use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Taille maximale acceptée pour un message entrant.
pub const MAX_MESSAGE_SIZE: u32 = 1 << 20;

/// Envoie un message : sa taille en u32 little endian, puis ses octets.
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let message_bytes = message.as_bytes();
    let size = u32::try_from(message_bytes.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "message too large"))?;
    stream.write_u32::<LittleEndian>(size)?;
    stream.write_all(message_bytes)?;
    stream.flush()
}

/// Reçoit un message envoyé par [`send_message`].
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    let size = stream.read_u32::<LittleEndian>()?;
    if size > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("message of {} bytes exceeds limit", size),
        ));
    }
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid data: {}", e))
    })
}

/// Connecte le client au serveur
pub fn connect_to_server(address: &str) -> io::Result<TcpStream> {
    TcpStream::connect(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_frame_layout() {
        let mut buffer = Vec::new();
        send_message(&mut buffer, "hi").unwrap();
        assert_eq!(buffer, vec![2, 0, 0, 0, b'h', b'i']);
    }

    #[test]
    fn test_send_then_receive() {
        let mut buffer = Vec::new();
        send_message(&mut buffer, "{\"Validate\":{}}").unwrap();
        send_message(&mut buffer, "").unwrap();
        let mut cursor = Cursor::new(buffer);
        assert_eq!(receive_message(&mut cursor).unwrap(), "{\"Validate\":{}}");
        assert_eq!(receive_message(&mut cursor).unwrap(), "");
        assert_eq!(
            receive_message(&mut cursor).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_rejects_oversized_and_invalid_utf8() {
        let mut cursor = Cursor::new(vec![0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            receive_message(&mut cursor).unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );

        let mut cursor = Cursor::new(vec![1, 0, 0, 0, 0xff]);
        assert_eq!(
            receive_message(&mut cursor).unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
    }
}
