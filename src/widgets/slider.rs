//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::utils::clamp_real;
use crate::*;

impl<M: TextMetrics> Context<M> {
    /// Slider over `[low, high]` showing the value with the style's slider precision.
    pub fn slider(&mut self, key: &str, value: &mut Real, low: Real, high: Real) -> ResourceState {
        let precision = self.style.slider_precision;
        self.slider_ex(key, value, low, high, 0.0, precision, WidgetOption::ALIGN_CENTER)
    }

    /// Slider over `[low, high]`.
    ///
    /// Dragging maps the pointer position across the cell onto the range, rounded to a multiple of
    /// `step` when it is non-zero. Shift-click edits the value as text. The value is always clamped
    /// into the range and [`ResourceState::CHANGE`] is reported only when it actually moved.
    #[allow(clippy::too_many_arguments)]
    pub fn slider_ex(&mut self, key: &str, value: &mut Real, low: Real, high: Real, step: Real, precision: usize, opt: WidgetOption) -> ResourceState {
        let last = *value;
        let id = self.get_id(key);

        let mut edited = last;
        if self.number_textbox(&mut edited, id, precision) {
            *value = clamp_real(edited, low, high);
            return if *value != last { ResourceState::CHANGE } else { ResourceState::NONE };
        }

        self.control(Some(id), opt, |ctx, r| {
            let mut res = ResourceState::NONE;
            let mut v = last;
            let buttons = ctx.input.mouse_down | ctx.input.mouse_pressed;
            if ctx.focus == Some(id) && buttons == MouseButton::LEFT && r.width > 0 {
                v = low + (ctx.input.mouse_pos.x - r.x) as Real * (high - low) / r.width as Real;
                if step != 0.0 {
                    v = (v / step).round() * step;
                }
            }
            v = clamp_real(v, low, high);
            *value = v;
            if v != last {
                res |= ResourceState::CHANGE;
            }

            ctx.draw_control_frame(Some(id), r, ControlColor::Base, opt);
            let w = ctx.style.thumb_size;
            let range = high - low;
            let x = if range > 0.0 { ((v - low) * (r.width - w) as Real / range) as i32 } else { 0 };
            let thumb = rect(r.x + x, r.y, w, r.height);
            ctx.draw_control_frame(Some(id), thumb, ControlColor::Button, opt);

            let text = format!("{:.*}", precision, v);
            ctx.draw_control_text(&text, r, ControlColor::Text, opt);
            res
        })
    }

    /// Number field changed by dragging horizontally, `step` per pixel.
    pub fn number(&mut self, key: &str, value: &mut Real, step: Real) -> ResourceState {
        let precision = self.style.number_precision;
        self.number_ex(key, value, step, precision, WidgetOption::ALIGN_CENTER)
    }

    /// Number field with explicit precision and options. Shift-click edits the value as text.
    pub fn number_ex(&mut self, key: &str, value: &mut Real, step: Real, precision: usize, opt: WidgetOption) -> ResourceState {
        let id = self.get_id(key);
        let last = *value;

        if self.number_textbox(value, id, precision) {
            return if *value != last { ResourceState::CHANGE } else { ResourceState::NONE };
        }

        self.control(Some(id), opt, |ctx, r| {
            let mut res = ResourceState::NONE;
            if ctx.focus == Some(id) && ctx.input.mouse_down.is_only_left() {
                *value += ctx.input.mouse_delta.x as Real * step;
            }
            if *value != last {
                res |= ResourceState::CHANGE;
            }

            ctx.draw_control_frame(Some(id), r, ControlColor::Base, opt);
            let text = format!("{:.*}", precision, *value);
            ctx.draw_control_text(&text, r, ControlColor::Text, opt);
            res
        })
    }
}
