//! Shared style helpers so pages and components stay visually consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white transition hover:bg-emerald-700"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-300 px-4 py-2 text-sm font-semibold text-slate-600 transition hover:border-emerald-500 hover:text-emerald-700"
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-300 bg-white px-3 py-2 text-sm text-slate-800 focus:border-emerald-500 focus:outline-none"
}

/// Extra classes for an input whose field failed validation.
pub fn input_error() -> &'static str {
    "border-red-400"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase tracking-wide text-slate-500"
}

pub fn error_text() -> &'static str {
    "mt-1 text-xs text-red-600"
}

// ============================================
// PANEL / CARD STYLES
// ============================================

pub fn card() -> &'static str {
    "rounded-xl border border-emerald-100 bg-white shadow-sm"
}

pub fn card_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container() -> &'static str {
    "rounded-xl border border-emerald-100 bg-white shadow-sm overflow-hidden"
}

pub fn table_header() -> &'static str {
    "border-b border-emerald-100 bg-emerald-50 text-left text-xs uppercase tracking-wide text-slate-500"
}

pub fn table_divider() -> &'static str {
    "divide-y divide-slate-100"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn page_title() -> &'static str {
    "text-2xl font-bold text-slate-900"
}

pub fn page_subtitle() -> &'static str {
    "text-sm text-slate-500"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn gain_text() -> &'static str {
    "text-emerald-600"
}

pub fn loss_text() -> &'static str {
    "text-red-600"
}
