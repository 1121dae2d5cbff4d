//! Display strings for the terminal UI.
//!
//! Every user-facing caption goes through `Label::text` so the whole
//! surface can switch between English and Arabic. The language also picks
//! a layout direction; computed values are never affected by either.

use crate::core::config::Language;

/// Horizontal layout direction for the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    CalcTitle,
    Item,
    Weight,
    Quantity,
    PricePerGram,
    TaxRate,
    ProviderFee,
    Subtotal,
    Tax,
    Total,
    TotalTax,
    TotalFees,
    GrandTotal,
    NoItems,
    ItemAdded,
    ItemRemoved,
    NoSuchItem,
    UnknownCommand,
    QuoteTitle,
    Karat,
    PerOunce,
    UpdatedAt,
    ApiKeySaved,
    ApiKeyMissing,
    FetchingQuote,
    QuoteFetched,
    QuoteFailed,
}

impl Label {
    pub fn text(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::En, Label::CalcTitle) => "Gold Price Calculator",
            (Language::Ar, Label::CalcTitle) => "حاسبة أسعار الذهب",
            (Language::En, Label::Item) => "Item",
            (Language::Ar, Label::Item) => "الصنف",
            (Language::En, Label::Weight) => "Weight (g)",
            (Language::Ar, Label::Weight) => "الوزن (غ)",
            (Language::En, Label::Quantity) => "Qty",
            (Language::Ar, Label::Quantity) => "الكمية",
            (Language::En, Label::PricePerGram) => "Price/g",
            (Language::Ar, Label::PricePerGram) => "سعر الغرام",
            (Language::En, Label::TaxRate) => "Tax Rate",
            (Language::Ar, Label::TaxRate) => "نسبة الضريبة",
            (Language::En, Label::ProviderFee) => "Fee",
            (Language::Ar, Label::ProviderFee) => "الرسوم",
            (Language::En, Label::Subtotal) => "Subtotal",
            (Language::Ar, Label::Subtotal) => "المجموع الفرعي",
            (Language::En, Label::Tax) => "Tax",
            (Language::Ar, Label::Tax) => "الضريبة",
            (Language::En, Label::Total) => "Total",
            (Language::Ar, Label::Total) => "الإجمالي",
            (Language::En, Label::TotalTax) => "Total Tax",
            (Language::Ar, Label::TotalTax) => "إجمالي الضريبة",
            (Language::En, Label::TotalFees) => "Total Provider Fees",
            (Language::Ar, Label::TotalFees) => "إجمالي رسوم المزود",
            (Language::En, Label::GrandTotal) => "Grand Total",
            (Language::Ar, Label::GrandTotal) => "المجموع الكلي",
            (Language::En, Label::NoItems) => "No items yet.",
            (Language::Ar, Label::NoItems) => "لا توجد أصناف بعد.",
            (Language::En, Label::ItemAdded) => "Item added",
            (Language::Ar, Label::ItemAdded) => "تمت إضافة صنف",
            (Language::En, Label::ItemRemoved) => "Item removed",
            (Language::Ar, Label::ItemRemoved) => "تمت إزالة الصنف",
            (Language::En, Label::NoSuchItem) => "No such item",
            (Language::Ar, Label::NoSuchItem) => "لا يوجد صنف بهذا الرقم",
            (Language::En, Label::UnknownCommand) => {
                "Unknown command. Type `help` for the command list."
            }
            (Language::Ar, Label::UnknownCommand) => "أمر غير معروف. اكتب help لعرض الأوامر.",
            (Language::En, Label::QuoteTitle) => "Gold Spot Quote",
            (Language::Ar, Label::QuoteTitle) => "سعر الذهب الفوري",
            (Language::En, Label::Karat) => "Karat",
            (Language::Ar, Label::Karat) => "العيار",
            (Language::En, Label::PerOunce) => "Ounce",
            (Language::Ar, Label::PerOunce) => "الأونصة",
            (Language::En, Label::UpdatedAt) => "As of",
            (Language::Ar, Label::UpdatedAt) => "حتى تاريخ",
            (Language::En, Label::ApiKeySaved) => "API key saved",
            (Language::Ar, Label::ApiKeySaved) => "تم حفظ مفتاح الخدمة",
            (Language::En, Label::ApiKeyMissing) => {
                "No API key stored. Run `aurum quote --save-key <KEY>` first."
            }
            (Language::Ar, Label::ApiKeyMissing) => {
                "لا يوجد مفتاح محفوظ. نفّذ aurum quote --save-key أولاً."
            }
            (Language::En, Label::FetchingQuote) => "Fetching gold quote...",
            (Language::Ar, Label::FetchingQuote) => "جارٍ جلب سعر الذهب...",
            (Language::En, Label::QuoteFetched) => "Gold quote updated",
            (Language::Ar, Label::QuoteFetched) => "تم تحديث سعر الذهب",
            (Language::En, Label::QuoteFailed) => "Could not fetch gold quote",
            (Language::Ar, Label::QuoteFailed) => "تعذر جلب سعر الذهب",
        }
    }
}
