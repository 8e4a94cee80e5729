//! Generation request payloads and their local validation.
//!
//! Requests are checked before anything touches the network, so a bad
//! argument costs neither time nor credits. Field docs double as the
//! parameter descriptions shown to MCP clients.

use std::fmt;
use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, Result};

/// Request body for the text-to-presentation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// The text content to generate the presentation from
    pub plain_text: String,
    /// Number of slides to generate (costs 1 credit per slide)
    pub length: u32,
    /// Template name to use (list available templates first)
    pub template: String,
    /// Optional UUIDs of previously uploaded documents to draw content from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_uuids: Option<Vec<String>>,
}

impl GenerationRequest {
    pub fn new(plain_text: impl Into<String>, length: u32, template: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
            length,
            template: template.into(),
            document_uuids: None,
        }
    }

    /// Check the request before it is sent over the wire.
    pub fn validate(&self) -> Result<()> {
        if self.plain_text.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "plain_text must not be empty".to_string(),
            ));
        }
        if self.length == 0 {
            return Err(ApiError::InvalidRequest(
                "length must be at least 1".to_string(),
            ));
        }
        if self.template.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "template must not be empty".to_string(),
            ));
        }
        if let Some(uuids) = &self.document_uuids
            && uuids.iter().any(|uuid| uuid.trim().is_empty())
        {
            return Err(ApiError::InvalidRequest(
                "document_uuids must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request body for the slide-by-slide endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SlideBySlideRequest {
    /// Template name or custom template ID
    pub template: String,
    /// Slide definitions, in presentation order
    pub slides: Vec<SlideSpec>,
    /// Optional language code such as ENGLISH or ORIGINAL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Whether stock images should be fetched for the slides (default true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_images: Option<bool>,
}

impl SlideBySlideRequest {
    /// Check the request before it is sent over the wire.
    ///
    /// Every slide's item count must fit the bounds of its layout.
    pub fn validate(&self) -> Result<()> {
        if self.template.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "template must not be empty".to_string(),
            ));
        }
        if self.slides.is_empty() {
            return Err(ApiError::InvalidRequest(
                "slides must not be empty".to_string(),
            ));
        }
        for (index, slide) in self.slides.iter().enumerate() {
            let bounds = slide.layout.item_bounds();
            if !bounds.contains(&slide.item_amount) {
                return Err(ApiError::InvalidRequest(format!(
                    "slide {}: layout '{}' needs {} item(s), got {}",
                    index + 1,
                    slide.layout,
                    describe_bounds(&bounds),
                    slide.item_amount
                )));
            }
        }
        Ok(())
    }
}

/// A single slide in a slide-by-slide request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SlideSpec {
    /// The slide title
    pub title: String,
    /// Layout for this slide
    pub layout: SlideLayout,
    /// Number of items on the slide (must fit the layout)
    pub item_amount: u32,
    /// The slide content
    pub content: String,
}

/// Layouts accepted by the slide-by-slide endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SlideLayout {
    Items,
    Steps,
    Summary,
    Comparison,
    BigNumber,
    Milestone,
    Pestel,
    Swot,
    Pyramid,
    Timeline,
    Funnel,
    Quote,
    Cycle,
    Thanks,
}

impl SlideLayout {
    /// Accepted item counts for this layout.
    pub fn item_bounds(self) -> RangeInclusive<u32> {
        match self {
            Self::Items | Self::Summary | Self::BigNumber | Self::Pyramid => 1..=5,
            Self::Steps | Self::Milestone | Self::Timeline | Self::Funnel | Self::Cycle => 3..=5,
            Self::Comparison => 2..=2,
            Self::Swot => 4..=4,
            Self::Pestel => 6..=6,
            Self::Quote => 1..=1,
            Self::Thanks => 0..=0,
        }
    }

    /// Wire name of the layout.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Steps => "steps",
            Self::Summary => "summary",
            Self::Comparison => "comparison",
            Self::BigNumber => "big-number",
            Self::Milestone => "milestone",
            Self::Pestel => "pestel",
            Self::Swot => "swot",
            Self::Pyramid => "pyramid",
            Self::Timeline => "timeline",
            Self::Funnel => "funnel",
            Self::Quote => "quote",
            Self::Cycle => "cycle",
            Self::Thanks => "thanks",
        }
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn describe_bounds(bounds: &RangeInclusive<u32>) -> String {
    if bounds.start() == bounds.end() {
        format!("exactly {}", bounds.start())
    } else {
        format!("{} to {}", bounds.start(), bounds.end())
    }
}
