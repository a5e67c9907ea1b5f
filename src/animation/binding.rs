/// Menu properties an animation clip can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    SelectorBlend,  // Maps to AnimatedProperties::selector_blend
    TargetWidth,    // Maps to AnimatedProperties::target_width
    SelectorOffset, // Maps to AnimatedProperties::selector_offset
}

impl AnimatedProperty {
    pub const ALL: [Self; 3] = [Self::SelectorBlend, Self::TargetWidth, Self::SelectorOffset];

    /// Dense index into [`Self::ALL`].
    #[inline]
    #[must_use]
    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Current values of every animatable menu property.
///
/// Written by the mixer during the animation phase of a frame and read by the
/// presentation step that follows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedProperties {
    pub selector_blend: f32,
    pub target_width: f32,
    pub selector_offset: f32,
}

impl AnimatedProperties {
    #[must_use]
    pub fn get(&self, property: AnimatedProperty) -> f32 {
        match property {
            AnimatedProperty::SelectorBlend => self.selector_blend,
            AnimatedProperty::TargetWidth => self.target_width,
            AnimatedProperty::SelectorOffset => self.selector_offset,
        }
    }

    pub fn set(&mut self, property: AnimatedProperty, value: f32) {
        match property {
            AnimatedProperty::SelectorBlend => self.selector_blend = value,
            AnimatedProperty::TargetWidth => self.target_width = value,
            AnimatedProperty::SelectorOffset => self.selector_offset = value,
        }
    }
}
