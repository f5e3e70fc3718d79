//! The fixed exposition payload.
//!
//! Two `tube_current_jobs_ready` gauge samples for a beanstalkd queue, one per
//! tube. Values are literals and never change while the process runs. Each
//! sample line separates the label set from the value with a single tab.

/// Route the payload is served on.
pub const METRICS_PATH: &str = "/metrics";

/// Content type the payload is served with.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// The response body, byte for byte.
pub const PAYLOAD: &str = concat!(
    "# metrics\n",
    "tube_current_jobs_ready{exported_instance=\"queue01:11300\",instance=\"10.4.1.100:8080\",job=\"beanstalkd\",k8s_namespace=\"dev\",k8s_pod_name=\"dumb-metrics-68bb8f6dd6-5m6sv\",k8s_service=\"beanstalkd\",tube=\"rql\"}\t50000\n",
    "tube_current_jobs_ready{exported_instance=\"queue01:11300\",instance=\"10.4.1.100:8080\",job=\"beanstalkd\",k8s_namespace=\"dev\",k8s_pod_name=\"dumb-metrics-68bb8f6dd6-5m6sv\",k8s_service=\"beanstalkd\",tube=\"trigger\"}\t10000\n",
);

/// Payload as raw bytes.
pub fn payload_bytes() -> &'static [u8] {
    PAYLOAD.as_bytes()
}
