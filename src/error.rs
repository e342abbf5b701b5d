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
use thiserror::Error;

/// Programming-contract violations detected by the engine.
///
/// These are never recovered from: the frame would otherwise be replayed with an undefined
/// z-order or clip state. The engine logs the violation and panics with its message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A scoped stack still holds entries when the frame ends.
    #[error("unbalanced {stack} stack at end of frame ({depth} entries left)")]
    UnbalancedStack {
        /// Name of the offending stack.
        stack: &'static str,
        /// Entries left on the stack.
        depth: usize,
    },
    /// An operation needed the top of a stack that is empty, such as a widget declared outside of any container.
    #[error("{stack} stack is empty")]
    EmptyStack {
        /// Name of the offending stack.
        stack: &'static str,
    },
    /// A push exceeded the configured stack capacity.
    #[error("{stack} stack overflow (capacity {capacity})")]
    StackOverflow {
        /// Name of the offending stack.
        stack: &'static str,
        /// Configured capacity.
        capacity: usize,
    },
    /// Too many commands were emitted in one frame.
    #[error("command list overflow (capacity {capacity})")]
    CommandListOverflow {
        /// Configured capacity.
        capacity: usize,
    },
    /// A jump was patched with a destination outside of the command list, or the patched entry is not a jump.
    #[error("invalid jump patch at {index} (destination {dst}, list length {len})")]
    JumpOutOfBounds {
        /// Index of the patched command.
        index: usize,
        /// Requested destination.
        dst: usize,
        /// Length of the command list.
        len: usize,
    },
    /// Root containers exist but the command list does not start with a jump.
    #[error("command list does not start with a jump")]
    MissingLeadingJump,
}

/// Logs and aborts the frame with the given violation.
pub(crate) fn fatal(violation: ContractViolation) -> ! {
    log::error!("{}", violation);
    panic!("{}", violation)
}
