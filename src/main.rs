// Copyright 2025 the Weighted Bezier Authors
// SPDX-License-Identifier: Apache-2.0

//! Weighted Bézier: an interactive rational cubic Bézier editor

use xilem::EventLoop;

fn main() -> anyhow::Result<()> {
    weighted_bezier::run(EventLoop::with_user_event())
}
