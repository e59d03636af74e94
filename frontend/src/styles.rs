pub const PAGE: &str = "container mx-auto px-4 py-8";
pub const TITLE: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TITLE_ACCENT: &str = "bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl max-w-2xl mx-auto border border-gray-100 dark:border-gray-700";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200 max-w-md mx-auto mt-8 text-center";
pub const WHEEL_WRAP: &str = "relative mx-auto mb-8 flex justify-center items-center";
pub const SPIN_BUTTON_ACTIVE: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";
pub const RESULT_WIN: &str = "flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-yellow-400 to-orange-500 text-white font-bold text-xl shadow-lg border-2 border-yellow-300 animate-bounce";
pub const RESULT_FAIL: &str = "flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-gray-500 to-gray-600 text-white font-bold text-xl shadow-lg border-2 border-gray-400";
pub const TOAST: &str = "fixed bottom-6 left-6 z-50 flex items-center gap-3 bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-100 dark:border-gray-700 px-4 py-3";
pub const TOAST_AVATAR: &str = "w-10 h-10 rounded-full bg-gray-100 dark:bg-gray-700 flex items-center justify-center overflow-hidden";
pub const TOAST_NAME: &str = "font-semibold text-sm text-gray-900 dark:text-white mr-2";
pub const TOAST_TIME: &str = "text-xs text-gray-400";
pub const TOAST_PRIZE: &str = "text-sm text-gray-600 dark:text-gray-300";
pub const TOAST_CLOSE: &str = "ml-2 text-gray-400 hover:text-gray-600 dark:hover:text-gray-200 cursor-pointer font-bold";
