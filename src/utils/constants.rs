pub const WELCOME_MESSAGE: &str =
    "Привіт, друже! Я твій новий веселий помічник! Обери опцію, щоб почати розваги 🎉:";
pub const CATEGORY_MENU_MESSAGE: &str = "Оберіть категорію, і я розкажу тобі цікавий жарт 😎:";
pub const SUBMISSION_PROMPT_MESSAGE: &str = "Ти хочеш поділитись своїм жартом? Напиши його тут!";
pub const SUBMISSION_CATEGORY_MESSAGE: &str =
    "Оберіть категорію для свого жарту, щоб я міг його додати:";
pub const EMPTY_CATEGORY_MESSAGE: &str = "У цій категорії поки що немає жартів. Оберіть іншу 😉:";
pub const GENERIC_FAILURE_MESSAGE: &str = "Щось пішло не так. Спробуй знову. 😔";
pub const THUMB_UP_REPLY: &str = "Дякую за твою оцінку! Раді, що сподобалось! 🥳";
pub const THUMB_DOWN_REPLY: &str =
    "Дякую за твою оцінку! Не переживай, наступний жарт буде ще кращим! 😅";
pub const SEND_JOKE_TEXT_MESSAGE: &str = "Надішли мені текст жарту або команду /start.";

pub const DEFAULT_HEALTH_PORT: u16 = 8080;
