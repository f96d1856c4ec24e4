use candle_core::Device;
use tracing::{debug, warn};

type OpenDevice = fn(usize) -> candle_core::Result<Device>;

/// GPU backends compiled into this build, in preference order.
const GPU_BACKENDS: &[(&str, OpenDevice)] = &[
    #[cfg(feature = "metal")]
    ("metal", Device::new_metal),
    #[cfg(feature = "cuda")]
    ("cuda", Device::new_cuda),
];

/// Device that [`FeatureBatch`](super::FeatureBatch) tensors are placed on: the first
/// compiled-in GPU backend that opens ordinal 0, otherwise the CPU.
pub fn select_device() -> Device {
    for (backend, open) in GPU_BACKENDS {
        match open(0) {
            Ok(device) => {
                debug!(backend = *backend, "Building batches on GPU device");
                return device;
            }
            Err(e) => warn!(backend = *backend, error = %e, "GPU backend unavailable"),
        }
    }

    debug!(
        gpu_backends = GPU_BACKENDS.len(),
        "Building batches on CPU device"
    );
    Device::Cpu
}
