//! SMS segmentation: encoding classification, splitting and per-segment cost.

mod segmenter;

pub use segmenter::{
    estimate_cost, segment, segment_count, Encoding, MessageSegment, SegmentationResult,
    GSM7_CONCATENATED_SEGMENT_LIMIT, GSM7_SEGMENT_COST, GSM7_SINGLE_SEGMENT_LIMIT,
    MAX_MESSAGE_LENGTH, UNICODE_CONCATENATED_SEGMENT_LIMIT, UNICODE_SEGMENT_COST,
    UNICODE_SINGLE_SEGMENT_LIMIT,
};
