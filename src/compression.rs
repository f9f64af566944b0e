use std::io::{self, Read};

use flate2::{read::GzEncoder, Compression};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{messages::Property, Error, Result};

/// Declared `CompressionType` part property for compressed payload parts.
pub const COMPRESSION_TYPE: &str = "application/gzip";
/// Declared `MimeType` part property. Always describes the original payload,
/// never the wire media type of the attachment.
pub const PAYLOAD_MIME_TYPE: &str = "application/xml";
/// Wire media type of every attachment, so that encryption of the part does
/// not confuse content negotiation downstream.
pub const ATTACHMENT_MIME_TYPE: &str = "application/octet-stream";

/// Pool size matching the original deployment default.
pub const DEFAULT_POOL_SIZE: usize = 5;

/// The fixed part-property pair declared for every compressed part.
pub fn part_properties() -> Vec<Property> {
    vec![
        Property::new("CompressionType", COMPRESSION_TYPE),
        Property::new("MimeType", PAYLOAD_MIME_TYPE),
    ]
}

/// Bounded worker pool parallelizing payload compression across in-flight
/// requests. Exhaustion queues further work; it never rejects.
pub struct CompressionPool {
    pool: ThreadPool,
}

impl CompressionPool {
    pub fn new(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(CompressionPool { pool })
    }

    /// Gzip-compresses the payload stream on a pool worker. The output is
    /// independently decompressible by any standard gzip reader.
    pub fn compress<R>(&self, source: R) -> Result<Vec<u8>>
    where
        R: Read + Send,
    {
        self.pool
            .install(move || {
                trace!("compressing payload on pool worker");
                let mut encoder = GzEncoder::new(source, Compression::default());
                let mut compressed = vec![];
                encoder.read_to_end(&mut compressed)?;
                Ok::<_, io::Error>(compressed)
            })
            .map_err(Error::CompressionIoFailure)
    }
}
