//! Conversion from GStreamer discoverer objects to bd_core models.

use std::time::Duration;

use gst::prelude::*;
use gst_pbutils::prelude::*;
use gst_pbutils::{DiscovererContainerInfo, DiscovererInfo, DiscovererResult, DiscovererStreamInfo};
use gstreamer as gst;
use gstreamer_pbutils as gst_pbutils;

use bd_core::models::{DiscoveryResult, DiscoveryStatus, StreamInfoNode, Successor, TagList, TagValue};

/// Snapshot everything the discoverer reported about one URI.
pub fn discovery_result(
    info: &DiscovererInfo,
    error: Option<&gst::glib::Error>,
) -> DiscoveryResult {
    let status = match info.result() {
        DiscovererResult::Ok => DiscoveryStatus::Ok,
        DiscovererResult::UriInvalid => DiscoveryStatus::InvalidUri,
        DiscovererResult::Error => DiscoveryStatus::Error,
        DiscovererResult::Timeout => DiscoveryStatus::Timeout,
        DiscovererResult::Busy => DiscoveryStatus::Busy,
        DiscovererResult::MissingPlugins => DiscoveryStatus::MissingPlugins,
        _ => DiscoveryStatus::Error,
    };

    let mut result = DiscoveryResult::new(info.uri().to_string(), status)
        .with_duration(info.duration().map(|t| Duration::from_nanos(t.nseconds())))
        .with_seekable(info.is_seekable());

    if let Some(tags) = info.tags() {
        result = result.with_tags(tag_list(&tags));
    }
    if let Some(root) = info.stream_info() {
        result = result.with_stream_info(stream_node(&root));
    }
    if let Some(err) = error {
        result = result.with_error_message(err.message());
    }
    if status == DiscoveryStatus::MissingPlugins {
        #[allow(deprecated)]
        let misc = info.misc().map(|s| s.to_string());
        if let Some(misc) = misc {
            result = result.with_misc(misc);
        }
    }

    result
}

/// Convert a stream and everything reachable from it.
///
/// The `next` stream takes precedence; container children are only
/// enumerated when there is none.
pub fn stream_node(info: &DiscovererStreamInfo) -> StreamInfoNode {
    let description = info.caps().map(|caps| {
        if caps.is_fixed() {
            gst_pbutils::pb_utils_get_codec_description(&caps).to_string()
        } else {
            caps.to_string()
        }
    });

    let successor = Successor::resolve(info.next().map(|next| stream_node(&next)), || {
        info.downcast_ref::<DiscovererContainerInfo>()
            .map(|container| container.streams().iter().map(stream_node).collect())
    });

    let mut node =
        StreamInfoNode::new(info.stream_type_nick().to_string()).with_successor(successor);
    if let Some(description) = description {
        node = node.with_description(description);
    }
    if let Some(tags) = info.tags() {
        node = node.with_tags(tag_list(&tags));
    }
    node
}

/// Copy a tag list, keyed by tag nick, in list order.
///
/// Multi-valued tags are merged the way `gst_tag_list_copy_value` does.
pub fn tag_list(tags: &gst::TagListRef) -> TagList {
    let mut list = TagList::new();

    for idx in 0..tags.n_tags() {
        let Some(name) = tags.nth_tag_name(idx) else {
            continue;
        };
        let name = name.to_string();
        let Some(value) = tags.generic(name.as_str()) else {
            continue;
        };
        list.push(gst::tags::tag_get_nick(name.as_str()).to_string(), tag_value(&value));
    }

    list
}

/// Strings verbatim; everything else through GStreamer value serialization.
fn tag_value(value: &gst::glib::Value) -> TagValue {
    if let Ok(Some(text)) = value.get::<Option<String>>() {
        return TagValue::Text(text);
    }

    match value.serialize() {
        Ok(serialized) => TagValue::Serialized(serialized.to_string()),
        Err(e) => {
            tracing::debug!("Cannot serialize tag value of type {}: {}", value.type_(), e);
            TagValue::Serialized(String::new())
        }
    }
}
