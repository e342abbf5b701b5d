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
use crate::*;

impl<M: TextMetrics> Context<M> {
    // Shared by headers and tree nodes. The expansion state lives in the tree node pool: a label
    // present there is toggled relative to its default (collapsed, or expanded with EXPANDED).
    fn node(&mut self, label: &str, is_treenode: bool, opt: WidgetOption) -> (Id, ResourceState) {
        let id = self.get_id(label);
        let slot = self.treenode_pool.get(id);
        self.layout_row(&[-1], 0);

        let mut active = slot.is_some();
        let expanded = if opt.is_expanded() { !active } else { active };

        let res = self.control(Some(id), WidgetOption::NONE, |ctx, r| {
            if ctx.clicked(Some(id)) {
                active = !active;
            }
            match slot {
                Some(slot) if active => ctx.treenode_pool.touch(slot),
                Some(slot) => ctx.treenode_pool.clear(slot),
                None if active => {
                    ctx.treenode_pool.init(id);
                }
                None => (),
            }

            if is_treenode {
                if ctx.hover == Some(id) {
                    ctx.draw_frame(r, ControlColor::ButtonHover);
                }
            } else {
                ctx.draw_control_frame(Some(id), r, ControlColor::Button, WidgetOption::NONE);
            }
            let icon = if expanded { IconId::Expanded } else { IconId::Collapsed };
            let color = ctx.style.color(ControlColor::Text);
            ctx.draw_icon(icon, rect(r.x, r.y, r.height, r.height), color);

            let shift = r.height - ctx.style.padding;
            ctx.draw_control_text(label, rect(r.x + shift, r.y, r.width - shift, r.height), ControlColor::Text, WidgetOption::NONE);
            if expanded { ResourceState::ACTIVE } else { ResourceState::NONE }
        });
        (id, res)
    }

    /// Full-width collapsible header. Returns [`ResourceState::ACTIVE`] while expanded.
    ///
    /// A click toggles the header; the new state shows from the next frame on.
    pub fn header(&mut self, label: &str, opt: WidgetOption) -> ResourceState { self.node(label, false, opt).1 }

    /// Collapsible tree node. While expanded, `f` runs indented and inside the node's id scope.
    pub fn treenode<F: FnOnce(&mut Self)>(&mut self, label: &str, opt: WidgetOption, f: F) -> ResourceState {
        let (id, res) = self.node(label, true, opt);
        if res.is_active() {
            let indent = self.style.indent;
            self.layout.adjust_indent(indent);
            self.push_id_raw(id);
            f(self);
            self.pop_id();
            self.layout.adjust_indent(-indent);
        }
        res
    }
}
