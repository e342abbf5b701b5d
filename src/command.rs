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
use crate::error::{fatal, ContractViolation};
use crate::{Color, IconId, Recti, Vec2i};

/// Draw commands recorded during a frame.
pub enum Command {
    /// Continues replay at `dst`. Unresolved (`None`) until the container owning it is closed
    /// or the frame ends.
    Jump {
        /// Index of the next command to replay.
        dst: Option<usize>,
    },
    /// Sets the renderer's clip rectangle.
    Clip {
        /// Rect to clip against.
        rect: Recti,
    },
    /// Draws a solid rectangle.
    Rect {
        /// Target rectangle.
        rect: Recti,
        /// Fill color.
        color: Color,
    },
    /// Draws text.
    Text {
        /// Top-left text position.
        pos: Vec2i,
        /// Text color.
        color: Color,
        /// UTF-8 string to render.
        text: String,
    },
    /// Draws an icon.
    Icon {
        /// Target rectangle.
        rect: Recti,
        /// Icon identifier.
        id: IconId,
        /// Tint color.
        color: Color,
    },
}

impl Command {
    /// Returns `true` for jump commands.
    pub fn is_jump(&self) -> bool { matches!(self, Command::Jump { .. }) }
}

/// Append-only command buffer with a fixed capacity.
///
/// Commands are recorded in call order. Root containers bracket their commands with a head and a
/// tail jump; [`crate::Context::end`] patches those jumps so that [`CommandList::iter`] visits the
/// containers in z-order without moving any command.
pub struct CommandList {
    commands: Vec<Command>,
    capacity: usize,
}

impl CommandList {
    pub(crate) fn new(capacity: usize) -> Self { Self { commands: Vec::with_capacity(capacity), capacity } }

    pub(crate) fn clear(&mut self) { self.commands.clear(); }

    pub(crate) fn push(&mut self, cmd: Command) -> usize {
        if self.commands.len() >= self.capacity {
            fatal(ContractViolation::CommandListOverflow { capacity: self.capacity });
        }
        self.commands.push(cmd);
        self.commands.len() - 1
    }

    /// Appends an unresolved jump and returns its index.
    pub(crate) fn push_jump(&mut self) -> usize { self.push(Command::Jump { dst: None }) }

    /// Points the jump at `index` to `dst`; `dst == len` ends replay.
    pub(crate) fn set_jump(&mut self, index: usize, dst: usize) {
        let len = self.commands.len();
        match self.commands.get_mut(index) {
            Some(Command::Jump { dst: slot }) if dst <= len => *slot = Some(dst),
            _ => fatal(ContractViolation::JumpOutOfBounds { index, dst, len }),
        }
    }

    /// Number of recorded commands, jumps included.
    pub fn len(&self) -> usize { self.commands.len() }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Returns the command at `index`.
    pub fn get(&self, index: usize) -> Option<&Command> { self.commands.get(index) }

    /// Raw commands in call order.
    pub fn as_slice(&self) -> &[Command] { &self.commands }

    /// Replays the list from index 0, following jumps, yielding only draw commands.
    pub fn iter(&self) -> CommandIter<'_> { CommandIter { commands: &self.commands, index: 0 } }
}

/// Iterator produced by [`CommandList::iter`].
pub struct CommandIter<'a> {
    commands: &'a [Command],
    index: usize,
}

impl<'a> Iterator for CommandIter<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cmd = self.commands.get(self.index)?;
            match cmd {
                Command::Jump { dst: Some(dst) } => self.index = *dst,
                Command::Jump { dst: None } => self.index += 1,
                _ => {
                    self.index += 1;
                    return Some(cmd);
                }
            }
        }
    }
}
