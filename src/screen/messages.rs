//! User-facing strings shown by the maintenance screen.

pub const UNKNOWN_BILLBOARD: &str = "غير معروف";

pub const LOAD_FAILED: &str = "فشل في تحميل سجلات الصيانة";

pub const VALIDATION_REQUIRED: &str = "يرجى اختيار اللوحة وسبب الصيانة";
pub const VALIDATION_BILLBOARD: &str = "يرجى اختيار لوحة صحيحة";
pub const VALIDATION_COST: &str = "يرجى إدخال تكلفة صحيحة";

pub const ADD_SUCCESS: &str = "تم إضافة سجل الصيانة بنجاح";
pub const ADD_FAILED: &str = "فشل في إضافة سجل الصيانة";

pub const UPDATE_SUCCESS: &str = "تم تحديث سجل الصيانة بنجاح";
pub const UPDATE_FAILED: &str = "فشل في تحديث سجل الصيانة";

pub const DELETE_CONFIRM: &str = "هل أنت متأكد من حذف سجل الصيانة؟";
pub const DELETE_SUCCESS: &str = "تم حذف سجل الصيانة";
pub const DELETE_FAILED: &str = "فشل في حذف سجل الصيانة";

pub const PRINT_EMPTY: &str = "لا توجد لوحات في الصيانة حالياً";
pub const PRINT_WINDOW_FAILED: &str = "فشل في فتح نافذة الطباعة";

pub fn print_ready(count: usize) -> String {
    format!("تم تحضير {count} لوحة للطباعة")
}
