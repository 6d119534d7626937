pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f9fafb;
  --panel: #f3f4f6;
  --surface: #ffffff;
  --border: #6ee7b7;
  --border-soft: rgba(110, 231, 183, 0.5);
  --text: #1f2937;
  --text-dim: #374151;
  --text-muted: #4b5563;
  --accent: #059669;
  --accent-strong: #047857;
  --negative: #ef4444;
  --shadow-soft: 0 10px 30px rgba(0, 0, 0, 0.12);
  --radius: 10px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --transition: 300ms ease-in-out;
}

.dark-theme {
  --bg: #111827;
  --panel: #1f2937;
  --surface: #1f2937;
  --border: #047857;
  --border-soft: rgba(4, 120, 87, 0.6);
  --text: #e5e7eb;
  --text-dim: #d1d5db;
  --text-muted: #9ca3af;
  --accent: #34d399;
  --accent-strong: #10b981;
  --negative: #f87171;
  --shadow-soft: 0 10px 30px rgba(0, 0, 0, 0.45);
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  line-height: 1.5;
  min-height: 100%;
}

.shell-app { background: var(--bg); color: var(--text); min-height: 100vh; transition: background var(--transition), color var(--transition); }
.shell-container { position: relative; width: 100%; display: flex; flex-direction: column; align-items: center; padding: 0 var(--space-4); }
.panel { background: var(--panel); border: 1px solid var(--border-soft); border-radius: var(--radius); box-shadow: var(--shadow-soft); }

.badge-float { position: fixed; top: var(--space-4); right: var(--space-4); z-index: 50; padding: var(--space-3); }
.badge-avatar { width: 40px; height: 40px; border-radius: 50%; object-fit: cover; }

/* Collapsing header: the tier classes below carry the fade, these two
   carry the layout collapse. */
.header-card {
  width: 100%;
  max-width: 64rem;
  margin-top: var(--space-4);
  overflow: hidden;
  transition: all var(--transition);
}
.header-card.expanded { visibility: visible; padding: var(--space-6); margin-bottom: var(--space-6); height: auto; }
.header-card.collapsed { visibility: hidden; padding: 0; margin-bottom: 0; height: 0; pointer-events: none; }
.header-card.scale-100 { transform: scale(1); }
.header-card.scale-90 { transform: scale(0.9); }

.opacity-100 { opacity: 1; }
.opacity-75 { opacity: 0.75; }
.opacity-50 { opacity: 0.5; }
.opacity-25 { opacity: 0.25; }
.opacity-10 { opacity: 0.1; }
.opacity-0 { opacity: 0; }

.header-layout { display: flex; flex-direction: column; align-items: center; gap: var(--space-6); }
.header-copy { display: flex; flex-direction: column; justify-content: center; text-align: center; }
.header-title { font-size: 28px; font-weight: 700; color: var(--text); margin: 0 0 var(--space-2); transition: color var(--transition); }
.header-title .accent { color: var(--accent); }
.header-text { color: var(--text-dim); margin: 0; transition: color var(--transition); }

.logo-stack { position: relative; width: 160px; height: 160px; flex: none; }
.logo-card { position: absolute; top: 0; left: 0; width: 100%; height: 100%; cursor: pointer; transition: transform var(--transition), z-index var(--transition); }
.logo-frame { width: 100%; height: 100%; background: #ffffff; border: 2px solid var(--border); border-radius: var(--radius); overflow: hidden; box-shadow: var(--shadow-soft); transition: transform var(--transition), box-shadow var(--transition); }
.logo-card:hover .logo-frame { transform: rotate(0deg); box-shadow: 0 16px 40px rgba(0, 0, 0, 0.2); }
.logo-img { width: 100%; height: 100%; object-fit: cover; display: block; }

.scroll-hint { color: var(--text-muted); text-align: center; overflow: hidden; transition: all var(--transition); }
.scroll-hint.expanded { height: auto; margin-bottom: var(--space-4); }
.scroll-hint.collapsed { height: 0; margin-bottom: 0; }
.scroll-hint p { margin: var(--space-2) 0 0; }
.chevron-bounce { width: 32px; height: 32px; margin: 0 auto; display: block; animation: bounce 1s infinite; }

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

/* The frame expands in place until the scroll threshold, then pins
   itself over the viewport. */
.frame-card {
  position: relative;
  width: 100%;
  max-width: 64rem;
  margin: 0;
  overflow: hidden;
  background: var(--surface);
  transition: all var(--transition);
}
.frame-card.fullscreen { position: fixed; top: 0; left: 0; right: 0; max-width: 100%; z-index: 30; border-radius: 0; border: 0; }
.frame-surface { width: 100%; height: 100%; background: var(--bg); transition: background var(--transition); }
.frame-embed { width: 100%; height: 100%; border: 0; display: block; }

.frame-spinner {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  z-index: 40;
  display: flex;
  align-items: center;
  gap: var(--space-2);
  background: var(--panel);
  padding: var(--space-4);
  border-radius: 999px;
  box-shadow: var(--shadow-soft);
}
.spinner { width: 32px; height: 32px; border-radius: 50%; border: 2px solid transparent; border-bottom-color: var(--accent); animation: spin 1s linear infinite; }
.spinner-label { color: var(--text-muted); font-weight: 500; }

@keyframes spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

.error-panel { width: 100%; height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: var(--space-6); text-align: center; }
.error-icon { width: 64px; height: 64px; color: var(--negative); margin-bottom: var(--space-4); }
.error-title { font-size: 20px; font-weight: 700; color: var(--text); margin: 0 0 var(--space-2); }
.error-text { color: var(--text-muted); margin: 0 0 var(--space-4); max-width: 36rem; }
.error-actions { display: flex; flex-direction: column; gap: var(--space-3); }

.btn { border: 0; padding: var(--space-2) var(--space-4); border-radius: var(--radius); font-weight: 700; color: #ffffff; cursor: pointer; transition: background var(--transition), filter var(--transition); }
.btn.primary { background: var(--accent); }
.btn.primary:hover { background: var(--accent-strong); }
.btn.secondary { background: var(--text-muted); border: 1px solid var(--border-soft); }
.btn.secondary:hover { filter: brightness(1.1); }

.scroll-spacer { height: 100vh; width: 100%; }

@media (min-width: 640px) {
  .header-layout { flex-direction: row; align-items: flex-start; }
  .header-copy { text-align: left; }
  .error-actions { flex-direction: row; gap: var(--space-4); }
}

@media (min-width: 768px) {
  .badge-avatar { width: 80px; height: 80px; }
  .header-title { font-size: 32px; }
}
"#;
