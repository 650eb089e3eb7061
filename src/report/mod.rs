use chrono::{DateTime, Datelike, Utc};
use std::fmt::Write;

use crate::models::MaintenanceRecord;

pub mod format;

use format::{PLACEHOLDER, escape_html, format_cost, format_date, format_time};

pub const REPORT_TITLE: &str = "سجلات لوحات الصيانة";
pub const IN_PROGRESS_BADGE: &str = "قيد الصيانة";

const STYLESHEET: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Arial', sans-serif;
      direction: rtl;
      text-align: right;
      background: linear-gradient(135deg, #141414 0%, #1f1f1f 100%);
      color: #e5e5e5;
      padding: 40px;
    }
    .container {
      max-width: 1200px;
      margin: 0 auto;
      background: rgba(30, 30, 30, 0.95);
      border-radius: 12px;
      padding: 40px;
      box-shadow: 0 8px 32px rgba(0, 0, 0, 0.8);
      border: 1px solid rgba(255, 215, 0, 0.2);
    }
    .header {
      text-align: center;
      margin-bottom: 40px;
      padding-bottom: 30px;
      border-bottom: 2px solid rgba(255, 215, 0, 0.3);
    }
    .header h1 { font-size: 32px; color: #FFD700; margin-bottom: 10px; }
    .header .icon { font-size: 48px; margin-bottom: 15px; }
    .header p { color: #b8b8b8; margin: 5px 0; font-size: 14px; }
    .stats {
      background: rgba(255, 215, 0, 0.08);
      padding: 20px;
      border-radius: 8px;
      margin-bottom: 30px;
      text-align: center;
      border: 1px solid rgba(255, 215, 0, 0.2);
    }
    .stats strong { color: #FFD700; font-size: 18px; }
    table {
      width: 100%;
      border-collapse: collapse;
      margin-top: 20px;
      background: rgba(20, 20, 20, 0.5);
      border-radius: 8px;
      overflow: hidden;
    }
    th, td {
      padding: 15px;
      text-align: right;
      border-bottom: 1px solid rgba(255, 215, 0, 0.1);
    }
    th { background: rgba(255, 215, 0, 0.15); color: #FFD700; font-weight: 600; font-size: 14px; }
    td { color: #e5e5e5; font-size: 13px; }
    .status-badge {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 20px;
      font-size: 11px;
      font-weight: 600;
    }
    .status-in-progress {
      background: rgba(255, 193, 7, 0.2);
      color: #FFC107;
      border: 1px solid rgba(255, 193, 7, 0.3);
    }
    .footer {
      margin-top: 40px;
      text-align: center;
      font-size: 12px;
      color: #888;
      padding-top: 20px;
      border-top: 1px solid rgba(255, 215, 0, 0.1);
    }
    .footer p { margin: 5px 0; }
    @media print {
      body { margin: 0; background: white; color: black; }
      .container { background: white; box-shadow: none; border: 1px solid #ddd; }
      .header h1 { color: #d4af37; }
      th { background: #f5f5f5; color: #333; }
      td { color: #333; }
      .no-print { display: none; }
    }
"#;

const COLUMNS: [&str; 7] = [
    "م",
    "اسم اللوحة",
    "سبب الصيانة",
    "تاريخ البدء",
    "الحالة",
    "التكلفة",
    "ملاحظات",
];

/// Render the standalone print report for the given records.
///
/// Callers pass only in-progress records; every record is rendered with the
/// in-progress badge.
pub fn render_report(records: &[&MaintenanceRecord], printed_at: DateTime<Utc>) -> String {
    let mut html = String::with_capacity(8 * 1024 + records.len() * 512);

    // Writing into a String cannot fail
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html dir="rtl" lang="ar">
<head>
  <meta charset="UTF-8">
  <title>{REPORT_TITLE}</title>
  <style>{STYLESHEET}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <div class="icon">🔧</div>
      <h1>{REPORT_TITLE}</h1>
      <p>تاريخ الطباعة: {date}</p>
      <p>الوقت: {time}</p>
    </div>
    <div class="stats">
      <strong>إجمالي اللوحات في الصيانة: {count} لوحة</strong>
    </div>
    <table>
      <thead>
        <tr>
"#,
        date = format_date(&printed_at),
        time = format_time(&printed_at),
        count = records.len(),
    );

    for column in COLUMNS {
        let _ = writeln!(html, "          <th>{column}</th>");
    }
    html.push_str("        </tr>\n      </thead>\n      <tbody>\n");

    for (index, record) in records.iter().enumerate() {
        let notes = record
            .notes
            .as_deref()
            .filter(|notes| !notes.is_empty())
            .map(escape_html)
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let _ = write!(
            html,
            r#"        <tr>
          <td>{index}</td>
          <td><strong>{name}</strong></td>
          <td>{reason}</td>
          <td>{start}</td>
          <td><span class="status-badge status-in-progress">{IN_PROGRESS_BADGE}</span></td>
          <td>{cost}</td>
          <td>{notes}</td>
        </tr>
"#,
            index = index + 1,
            name = escape_html(&record.billboard_name),
            reason = escape_html(&record.reason),
            start = format_date(&record.start_date),
            cost = format_cost(record.cost),
        );
    }

    let _ = write!(
        html,
        r#"      </tbody>
    </table>
    <div class="footer">
      <p>تم إنشاء هذا التقرير تلقائياً من نظام إدارة اللوحات الإعلانية</p>
      <p>© {year} - جميع الحقوق محفوظة</p>
    </div>
  </div>
</body>
</html>
"#,
        year = printed_at.year(),
    );

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaintenanceStatus;
    use chrono::TimeZone;

    fn record(name: &str, reason: &str, cost: Option<f64>, notes: Option<&str>) -> MaintenanceRecord {
        MaintenanceRecord {
            id: 1,
            billboard_id: 1,
            billboard_name: name.to_string(),
            reason: reason.to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            end_date: None,
            status: MaintenanceStatus::InProgress,
            notes: notes.map(str::to_string),
            cost,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_report_structure() {
        let a = record("Gate A", "Light damage", Some(150.5), None);
        let b = record("Gate C", "Broken frame", None, Some("urgent"));
        let printed_at = Utc.with_ymd_and_hms(2025, 1, 2, 10, 30, 0).unwrap();

        let html = render_report(&[&a, &b], printed_at);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html dir="rtl" lang="ar">"#));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("@media print"));
        assert!(html.contains("إجمالي اللوحات في الصيانة: 2 لوحة"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("<strong>Gate A</strong>"));
        assert!(html.contains("<td>150.50 د.ل</td>"));
        assert!(html.contains("<td>urgent</td>"));
        assert!(html.contains("<td>٠١/٠٥/٢٠٢٤</td>"));
        assert!(html.contains("© 2025"));
        assert_eq!(html.matches(IN_PROGRESS_BADGE).count(), 2);
    }

    #[test]
    fn test_missing_cost_and_notes_use_placeholder() {
        let a = record("Gate A", "Light damage", None, None);
        let html = render_report(&[&a], Utc::now());
        assert_eq!(html.matches("<td>-</td>").count(), 2);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let a = record("<script>alert(1)</script>", "a & b", None, None);
        let html = render_report(&[&a], Utc::now());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<td>a &amp; b</td>"));
    }
}
