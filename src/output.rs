//! # Output Module
//!
//! Writes rendered frames to disk and, optionally, streams them to a running
//! [tev](https://github.com/Tom94/tev) viewer so progressive passes can be
//! watched as they land.

use std::net::TcpStream;
use std::path::Path;

use image::{Rgb32FImage, RgbImage};
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

use crate::error::Result;

/// Default tev port, used when the address has none.
pub const TEV_DEFAULT_PORT: u16 = 14158;

const TEV_IMAGE_NAME: &str = "zerhacken";
const TEV_CHANNELS: [&str; 3] = ["R", "G", "B"];

/// Write an 8-bit RGB image as PNG.
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    image.save_with_format(output_path, image::ImageFormat::Png)?;
    debug!("Image saved as {}", output_path.display());
    Ok(())
}

/// Live preview connection to a tev instance.
///
/// Failures are logged and the preview turns itself off; they never abort
/// the render.
pub struct TevPreview {
    client: Option<TevClient>,
    address: String,
    created: bool,
}

impl TevPreview {
    /// Connect to tev at `address` (`host` or `host:port`).
    pub fn connect(address: &str) -> Self {
        // Add default port if not specified
        let address = if address.contains(':') {
            address.to_string()
        } else {
            format!("{}:{}", address, TEV_DEFAULT_PORT)
        };

        debug!("Attempting to connect to TEV at {}", address);

        let client = match TcpStream::connect(&address) {
            Ok(stream) => {
                if let Err(e) = stream.set_nodelay(true) {
                    debug!("Failed to set TCP_NODELAY: {}", e);
                }
                info!("Connected to TEV at {}", address);
                Some(TevClient::wrap(stream))
            }
            Err(e) => {
                warn!("Failed to connect to TEV on {}: {}", address, e);
                None
            }
        };

        Self {
            client,
            address,
            created: false,
        }
    }

    /// True while the connection is usable.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Send the current frame, creating the tev image on first use.
    pub fn update(&mut self, image: &Rgb32FImage) {
        let Some(client) = self.client.as_mut() else {
            return;
        };
        let (width, height) = image.dimensions();

        if !self.created {
            let create_packet = PacketCreateImage {
                image_name: TEV_IMAGE_NAME,
                width,
                height,
                channel_names: &TEV_CHANNELS,
                grab_focus: true,
            };
            if let Err(e) = client.send(create_packet) {
                warn!("Failed to create image in TEV: {}", e);
                self.client = None;
                return;
            }
            self.created = true;
        }

        // Interleaved RGBRGB... with stride 3 per channel
        let pixel_count = width as u64 * height as u64;
        let update_packet = PacketUpdateImage {
            image_name: TEV_IMAGE_NAME,
            grab_focus: false,
            channel_names: &TEV_CHANNELS,
            channel_offsets: &[0, 1, 2],
            channel_strides: &[3, 3, 3],
            x: 0,
            y: 0,
            width,
            height,
            data: image.as_raw(),
        };

        let start_time = std::time::Instant::now();
        match client.send(update_packet) {
            Ok(_) => debug!(
                "Sent {} pixels to TEV at {} in {:.2?}",
                pixel_count,
                self.address,
                start_time.elapsed()
            ),
            Err(e) => {
                warn!("Failed to send image data to TEV: {}", e);
                self.client = None;
            }
        }
    }
}
