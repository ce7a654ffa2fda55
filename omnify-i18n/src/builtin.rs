//! Built-in message table
//!
//! Templates use `${name}` placeholders. Field messages take `displayName`
//! plus `min`/`max` where relevant; the kana description takes `label`.

/// Locales every field message is translated into.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja", "vi", "ko", "zh-CN", "zh-TW", "th", "es"];

type Entry = (&'static str, &'static [(&'static str, &'static str)]);

static MESSAGES: &[Entry] = &[
    (
        "required",
        &[
            ("en", "${displayName} is required"),
            ("ja", "${displayName}は必須です"),
            ("vi", "${displayName} là bắt buộc"),
            ("ko", "${displayName}은(는) 필수입니다"),
            ("zh-CN", "${displayName}是必填项"),
            ("zh-TW", "${displayName}為必填欄位"),
            ("th", "${displayName} จำเป็นต้องกรอก"),
            ("es", "${displayName} es obligatorio"),
        ],
    ),
    (
        "minLength",
        &[
            ("en", "${displayName} must be at least ${min} characters"),
            ("ja", "${displayName}は${min}文字以上で入力してください"),
            ("vi", "${displayName} phải có ít nhất ${min} ký tự"),
            ("ko", "${displayName}은(는) ${min}자 이상이어야 합니다"),
            ("zh-CN", "${displayName}至少需要${min}个字符"),
            ("zh-TW", "${displayName}至少需要${min}個字元"),
            ("th", "${displayName} ต้องมีอย่างน้อย ${min} ตัวอักษร"),
            ("es", "${displayName} debe tener al menos ${min} caracteres"),
        ],
    ),
    (
        "maxLength",
        &[
            ("en", "${displayName} must be at most ${max} characters"),
            ("ja", "${displayName}は${max}文字以内で入力してください"),
            ("vi", "${displayName} không được quá ${max} ký tự"),
            ("ko", "${displayName}은(는) ${max}자 이하여야 합니다"),
            ("zh-CN", "${displayName}最多${max}个字符"),
            ("zh-TW", "${displayName}最多${max}個字元"),
            ("th", "${displayName} ต้องไม่เกิน ${max} ตัวอักษร"),
            ("es", "${displayName} debe tener como máximo ${max} caracteres"),
        ],
    ),
    (
        "min",
        &[
            ("en", "${displayName} must be at least ${min}"),
            ("ja", "${displayName}は${min}以上で入力してください"),
            ("vi", "${displayName} phải lớn hơn hoặc bằng ${min}"),
            ("ko", "${displayName}은(는) ${min} 이상이어야 합니다"),
            ("zh-CN", "${displayName}必须大于等于${min}"),
            ("zh-TW", "${displayName}必須大於等於${min}"),
            ("th", "${displayName} ต้องมากกว่าหรือเท่ากับ ${min}"),
            ("es", "${displayName} debe ser al menos ${min}"),
        ],
    ),
    (
        "max",
        &[
            ("en", "${displayName} must be at most ${max}"),
            ("ja", "${displayName}は${max}以下で入力してください"),
            ("vi", "${displayName} phải nhỏ hơn hoặc bằng ${max}"),
            ("ko", "${displayName}은(는) ${max} 이하여야 합니다"),
            ("zh-CN", "${displayName}必须小于等于${max}"),
            ("zh-TW", "${displayName}必須小於等於${max}"),
            ("th", "${displayName} ต้องน้อยกว่าหรือเท่ากับ ${max}"),
            ("es", "${displayName} debe ser como máximo ${max}"),
        ],
    ),
    (
        "email",
        &[
            ("en", "Please enter a valid email address"),
            ("ja", "有効なメールアドレスを入力してください"),
            ("vi", "Vui lòng nhập địa chỉ email hợp lệ"),
            ("ko", "유효한 이메일 주소를 입력하세요"),
            ("zh-CN", "请输入有效的电子邮件地址"),
            ("zh-TW", "請輸入有效的電子郵件地址"),
            ("th", "กรุณากรอกอีเมลที่ถูกต้อง"),
            ("es", "Por favor, introduce una dirección de correo electrónico válida"),
        ],
    ),
    (
        "url",
        &[
            ("en", "Please enter a valid URL"),
            ("ja", "有効なURLを入力してください"),
            ("vi", "Vui lòng nhập URL hợp lệ"),
            ("ko", "유효한 URL을 입력하세요"),
            ("zh-CN", "请输入有效的URL"),
            ("zh-TW", "請輸入有效的網址"),
            ("th", "กรุณากรอก URL ที่ถูกต้อง"),
            ("es", "Por favor, introduce una URL válida"),
        ],
    ),
    (
        "pattern",
        &[
            ("en", "${displayName} format is invalid"),
            ("ja", "${displayName}の形式が正しくありません"),
            ("vi", "${displayName} không đúng định dạng"),
            ("ko", "${displayName} 형식이 올바르지 않습니다"),
            ("zh-CN", "${displayName}格式不正确"),
            ("zh-TW", "${displayName}格式不正確"),
            ("th", "รูปแบบ${displayName}ไม่ถูกต้อง"),
            ("es", "El formato de ${displayName} no es válido"),
        ],
    ),
    // Stand-in display name when a field has none
    ("fieldName", &[("en", "This field"), ("ja", "この項目")]),
    (
        "kana.fullWidthKatakana",
        &[("en", "full-width katakana"), ("ja", "全角カタカナ")],
    ),
    (
        "kana.halfWidthKatakana",
        &[("en", "half-width katakana"), ("ja", "半角カタカナ")],
    ),
    ("kana.hiragana", &[("en", "hiragana"), ("ja", "ひらがな")]),
    ("kana.mixed", &[("en", "kana characters"), ("ja", "カナ文字")]),
    (
        "kana.pleaseEnter",
        &[("en", "Please enter in ${label}"), ("ja", "${label}で入力してください")],
    ),
];

/// Built-in template for `key` in exactly `locale`.
pub fn template(key: &str, locale: &str) -> Option<&'static str> {
    MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, locales)| locales.iter().find(|(l, _)| *l == locale))
        .map(|(_, template)| *template)
}

/// Whether `key` is part of the built-in table.
pub fn contains(key: &str) -> bool {
    MESSAGES.iter().any(|(k, _)| *k == key)
}

/// Built-in keys in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    MESSAGES.iter().map(|(k, _)| *k)
}
