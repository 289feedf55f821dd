//! Line-delimited JSON-RPC framing that survives bad input
//!
//! rmcp ends the session on the first frame its codec rejects. Here a line
//! that is not valid UTF-8 or not a JSON-RPC message is logged and dropped,
//! and the session keeps reading.

use futures::{future, Stream, StreamExt};
use rmcp::service::{RxJsonRpcMessage, TxJsonRpcMessage};
use rmcp::transport::async_rw::{JsonRpcMessageCodec, JsonRpcMessageCodecError};
use rmcp::RoleServer;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite};
use tracing::warn;

/// Outgoing half of the session
pub type FrameSink<W> = FramedWrite<W, JsonRpcMessageCodec<TxJsonRpcMessage<RoleServer>>>;

/// Decoder yielding `None` for a rejected line instead of an error
struct SkipBadFrames<T> {
    inner: JsonRpcMessageCodec<T>,
}

impl<T> Default for SkipBadFrames<T> {
    fn default() -> Self {
        Self {
            inner: JsonRpcMessageCodec::default(),
        }
    }
}

impl<T> SkipBadFrames<T> {
    fn recover(
        result: Result<Option<T>, JsonRpcMessageCodecError>,
    ) -> Result<Option<Option<T>>, JsonRpcMessageCodecError> {
        match result {
            Ok(frame) => Ok(frame.map(Some)),
            Err(JsonRpcMessageCodecError::Io(e)) => Err(JsonRpcMessageCodecError::Io(e)),
            Err(e) => {
                warn!("Dropping malformed MCP frame: {}", e);
                Ok(Some(None))
            }
        }
    }
}

impl<T: DeserializeOwned> Decoder for SkipBadFrames<T> {
    type Item = Option<T>;
    type Error = JsonRpcMessageCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        Self::recover(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        Self::recover(self.inner.decode_eof(buf))
    }
}

/// Frame a reader/writer pair for [`rmcp::ServiceExt::serve`]
pub fn framed<R, W>(
    reader: R,
    writer: W,
) -> (
    FrameSink<W>,
    impl Stream<Item = RxJsonRpcMessage<RoleServer>> + Send + Unpin + 'static,
)
where
    R: AsyncRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    let incoming = FramedRead::new(reader, SkipBadFrames::default()).filter_map(|frame| {
        future::ready(match frame {
            Ok(message) => message,
            Err(e) => {
                warn!("MCP input failed: {}", e);
                None
            }
        })
    });

    (FramedWrite::new(writer, JsonRpcMessageCodec::default()), incoming)
}
