//! Fragments written into the analysis panel.
//!
//! Every fragment has an HTML form for the page and a plain-text form for
//! the terminal, both rendered from askama templates.

use crate::error::BackendError;
use crate::models::{format_percent, AnalysisResult, ScoreClass};
use askama::Template;

#[derive(Template)]
#[template(
    source = "<strong>Prediction:</strong> {{ prediction|safe }} <span class=\"text-sm\">({{ confidence }} confidence)</span>",
    ext = "html"
)]
struct PredictionHtml<'a> {
    prediction: &'a str,
    confidence: &'a str,
}

#[derive(Template)]
#[template(source = "Prediction: {{ prediction }} ({{ confidence }} confidence)", ext = "txt")]
struct PredictionText<'a> {
    prediction: &'a str,
    confidence: &'a str,
}

/// The report is trusted backend markup and is inserted unescaped.
#[derive(Template)]
#[template(
    source = "<div class=\"p-4 darker-bg rounded\"><h4 class=\"font-bold mb-2\">AI Medical Report</h4><p>{{ report|safe }}</p></div>",
    ext = "html"
)]
struct ReportHtml<'a> {
    report: &'a str,
}

#[derive(Template)]
#[template(source = "AI Medical Report: {{ report }}", ext = "txt")]
struct ReportText<'a> {
    report: &'a str,
}

/// One rendered element, as markup and as plain text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub html: String,
    pub text: String,
}

/// Everything the analysis panel shows for one result.
///
/// Built in full before any element is written, so a result that cannot be
/// rendered leaves the previous panel untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAnalysis {
    pub prediction: Fragment,
    pub scores: Vec<(ScoreClass, String)>,
    pub report: Fragment,
}

pub fn render_analysis(result: &AnalysisResult) -> Result<RenderedAnalysis, BackendError> {
    let scores = ScoreClass::ALL
        .iter()
        .map(|&class| Ok((class, format_percent(result.probability(class)?))))
        .collect::<Result<Vec<_>, BackendError>>()?;

    Ok(RenderedAnalysis {
        prediction: prediction(&result.prediction, result.confidence)?,
        scores,
        report: report(&result.medical_report)?,
    })
}

pub fn prediction(prediction: &str, confidence: f64) -> Result<Fragment, askama::Error> {
    let confidence = format_percent(confidence);

    Ok(Fragment {
        html: PredictionHtml {
            prediction,
            confidence: &confidence,
        }
        .render()?,
        text: PredictionText {
            prediction,
            confidence: &confidence,
        }
        .render()?,
    })
}

pub fn report(report: &str) -> Result<Fragment, askama::Error> {
    Ok(Fragment {
        html: ReportHtml { report }.render()?,
        text: ReportText { report }.render()?,
    })
}
