use bitflags::bitflags;

pub const AXIS_COUNT: usize = 3;

bitflags! {
    /// Selector over the x/y/z scale components a handle edits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AxisMask: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const XY = Self::X.bits() | Self::Y.bits();
        const XZ = Self::X.bits() | Self::Z.bits();
        const YZ = Self::Y.bits() | Self::Z.bits();
        const XYZ = Self::X.bits() | Self::Y.bits() | Self::Z.bits();
    }
}

impl AxisMask {
    /// The seven handles of the manipulator, in display order.
    pub const HANDLES: [AxisMask; 7] =
        [Self::X, Self::Y, Self::Z, Self::XY, Self::XZ, Self::YZ, Self::XYZ];

    pub fn contains_axis(self, axis: usize) -> bool {
        debug_assert!(axis < AXIS_COUNT);
        self.bits() & (1 << axis) != 0
    }

    pub fn axis_count(self) -> u32 {
        self.bits().count_ones()
    }

    pub fn label(self) -> &'static str {
        match self.bits() {
            0b001 => "x",
            0b010 => "y",
            0b100 => "z",
            0b011 => "xy",
            0b101 => "xz",
            0b110 => "yz",
            0b111 => "xyz",
            _ => "",
        }
    }
}
