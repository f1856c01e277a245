//! Block formatting.
//!
//! [CSS 2.1 § 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
//! [CSS 2.1 § 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)

use super::{BoxType, Dimensions, LayoutBox, LayoutError};
use crate::values::Value;

impl LayoutBox<'_> {
    /// Lay out this box and its descendants inside `containing_block`.
    ///
    /// Only block boxes receive geometry; inline and anonymous boxes are left
    /// untouched.
    ///
    /// Laying out the same tree twice against the same containing block
    /// yields the same dimensions.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] from style lookups.
    pub fn layout(&mut self, containing_block: Dimensions) -> Result<(), LayoutError> {
        match self.box_type {
            BoxType::Block => self.layout_block(containing_block),
            BoxType::Inline | BoxType::Anonymous => Ok(()),
        }
    }

    fn layout_block(&mut self, containing_block: Dimensions) -> Result<(), LayoutError> {
        // STEP 1: Child width depends on the parent's width, so the width has
        // to be resolved before laying out the children.
        self.calculate_block_width(containing_block)?;

        // STEP 2: Determine where the box sits within its containing block.
        self.calculate_block_position(containing_block)?;

        // STEP 3: Recursively lay out the children of this box.
        self.layout_block_children()?;

        // STEP 4: Parent height depends on child height, so it is only known
        // once the children are done.
        self.calculate_block_height()
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Calculate the width of a block-level box.
    fn calculate_block_width(&mut self, containing_block: Dimensions) -> Result<(), LayoutError> {
        // [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
        //
        // "The following constraints must hold among the used values of the
        // other properties:
        //
        //   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
        //   'padding-right' + 'border-right-width' + 'margin-right'
        //   = width of containing block"
        let style = self.style_node()?;
        let auto = Value::keyword("auto");
        let zero = Value::px(0.0);

        // STEP 1: Read the specified values.
        // `width` has initial value `auto`; margins, borders and padding
        // default to zero.
        let mut width = style.value("width").cloned().unwrap_or(auto);

        let mut margin_left = style.lookup("margin-left", "margin", &zero);
        let mut margin_right = style.lookup("margin-right", "margin", &zero);

        let border_left = style.lookup("border-left-width", "border-width", &zero);
        let border_right = style.lookup("border-right-width", "border-width", &zero);

        let padding_left = style.lookup("padding-left", "padding", &zero);
        let padding_right = style.lookup("padding-right", "padding", &zero);

        let total: f64 = [
            &margin_left,
            &margin_right,
            &border_left,
            &border_right,
            &padding_left,
            &padding_right,
            &width,
        ]
        .into_iter()
        .map(Value::to_px)
        .sum();

        // STEP 2: Handle the over-constrained case.
        //
        // "If 'width' is not 'auto' and 'border-left-width' + 'padding-left' +
        // 'width' + 'padding-right' + 'border-right-width' (plus any of
        // 'margin-left' or 'margin-right' that are not 'auto') is larger than
        // the width of the containing block, then any 'auto' values for
        // 'margin-left' or 'margin-right' are, for the following rules,
        // treated as zero."
        if !width.is_auto() && total > containing_block.content.width {
            if margin_left.is_auto() {
                margin_left = zero.clone();
            }
            if margin_right.is_auto() {
                margin_right = zero.clone();
            }
        }

        // STEP 3: Apply the constraint rules.
        // Positive underflow is space to fill, negative is overflow.
        let underflow = containing_block.content.width - total;

        match (width.is_auto(), margin_left.is_auto(), margin_right.is_auto()) {
            // "If all of the above have a computed value other than 'auto', the
            // values are said to be 'over-constrained' [...] the specified value
            // of 'margin-right' is ignored and the value is calculated so as to
            // make the equality true."
            (false, false, false) => {
                margin_right = Value::px(margin_right.to_px() + underflow);
            }

            // "If there is exactly one value specified as 'auto', its used value
            // follows from the equality."
            (false, false, true) => margin_right = Value::px(underflow),
            (false, true, false) => margin_left = Value::px(underflow),

            // "If 'width' is set to 'auto', any other 'auto' values become '0'
            // and 'width' follows from the resulting equality."
            (true, _, _) => {
                if margin_left.is_auto() {
                    margin_left = zero.clone();
                }
                if margin_right.is_auto() {
                    margin_right = zero.clone();
                }

                if underflow >= 0.0 {
                    width = Value::px(underflow);
                } else {
                    // Width can't be negative; overflow goes to the right margin.
                    width = zero;
                    margin_right = Value::px(margin_right.to_px() + underflow);
                }
            }

            // "If both 'margin-left' and 'margin-right' are 'auto', their used
            // values are equal. This horizontally centers the element with
            // respect to the edges of the containing block."
            (false, true, true) => {
                margin_left = Value::px(underflow / 2.0);
                margin_right = Value::px(underflow / 2.0);
            }
        }

        // STEP 4: Store the used values.
        let dimensions = &mut self.dimensions;
        dimensions.content.width = width.to_px();

        dimensions.padding.left = padding_left.to_px();
        dimensions.padding.right = padding_right.to_px();

        dimensions.border.left = border_left.to_px();
        dimensions.border.right = border_right.to_px();

        dimensions.margin.left = margin_left.to_px();
        dimensions.margin.right = margin_right.to_px();

        Ok(())
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "In a block formatting context, boxes are laid out one after the other,
    /// vertically, beginning at the top of a containing block."
    ///
    /// The containing block's current content height is the bottom of the
    /// previous sibling, so the box is placed right below it.
    fn calculate_block_position(
        &mut self,
        containing_block: Dimensions,
    ) -> Result<(), LayoutError> {
        let style = self.style_node()?;
        let zero = Value::px(0.0);

        // STEP 1: Resolve the vertical box model values. An `auto` margin
        // becomes zero.
        let margin_top = style.lookup("margin-top", "margin", &zero).to_px();
        let margin_bottom = style.lookup("margin-bottom", "margin", &zero).to_px();

        let border_top = style.lookup("border-top-width", "border-width", &zero).to_px();
        let border_bottom = style
            .lookup("border-bottom-width", "border-width", &zero)
            .to_px();

        let padding_top = style.lookup("padding-top", "padding", &zero).to_px();
        let padding_bottom = style.lookup("padding-bottom", "padding", &zero).to_px();

        let dimensions = &mut self.dimensions;
        dimensions.margin.top = margin_top;
        dimensions.margin.bottom = margin_bottom;
        dimensions.border.top = border_top;
        dimensions.border.bottom = border_bottom;
        dimensions.padding.top = padding_top;
        dimensions.padding.bottom = padding_bottom;

        // STEP 2: "Each box's left outer edge touches the left edge of the
        // containing block."
        dimensions.content.x = containing_block.content.x
            + dimensions.margin.left
            + dimensions.border.left
            + dimensions.padding.left;

        // STEP 3: Place the box below all previous boxes in the container.
        dimensions.content.y = containing_block.content.y
            + containing_block.content.height
            + dimensions.margin.top
            + dimensions.border.top
            + dimensions.padding.top;

        Ok(())
    }

    /// Lay out the children top to bottom, growing this box's content height
    /// by each child's margin box.
    fn layout_block_children(&mut self) -> Result<(), LayoutError> {
        self.dimensions.content.height = 0.0;

        for child in &mut self.children {
            child.layout(self.dimensions)?;
            self.dimensions.content.height += child.dimensions.margin_box().height;
        }

        Ok(())
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// An explicit `height` length wins; otherwise the height accumulated from
    /// the children stands.
    fn calculate_block_height(&mut self) -> Result<(), LayoutError> {
        let height = self
            .style_node()?
            .value("height")
            .filter(|value| value.is_length())
            .map(Value::to_px);
        if let Some(height) = height {
            self.dimensions.content.height = height;
        }
        Ok(())
    }
}
